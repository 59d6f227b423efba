use iced::{
    Element, Length, Theme, border,
    widget::{Column, column, container, container::bordered_box, row, scrollable, text},
};

/// Titled group of controls
pub fn section<'a, Message>(
    title: &'a str,
    children: Vec<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        column![text(title).size(16), Column::with_children(children).spacing(6)].spacing(8),
    )
    .style(|theme: &Theme| bordered_box(theme).border(border::width(1).rounded(4)))
    .padding(10)
    .width(Length::Fill)
    .into()
}

/// Control with a caption above it (slider values go in the caption)
pub fn labeled<'a, Message>(
    caption: String,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    column![text(caption), control.into()].spacing(4).into()
}

/// Controls on the left, image on the right
pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(row![
        container(scrollable(sidebar.into()))
            .padding(10)
            .width(Length::FillPortion(1)),
        container(main_content.into())
            .padding(10)
            .center_x(Length::FillPortion(3))
            .center_y(Length::Fill),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
