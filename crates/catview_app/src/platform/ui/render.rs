use catview_core::{AppViewModel, FontColor, FontSize, Msg};
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, column, container, pick_list, row, scrollable, text, text_input, Column,
};
use iced::{Alignment, Element, Length};

use super::constants::{MAX_SUGGESTIONS, SUGGESTION_LIST_HEIGHT};
use crate::platform::app::Message;

pub fn render<'a>(
    view: &'a AppViewModel,
    preview: Option<&'a Handle>,
    preview_error: Option<&'a str>,
) -> Element<'a, Message> {
    let controls = view.controls;

    let mut tag_input = text_input("Type to filter tags", &view.tag_input).padding(6);
    if controls.tag_input {
        tag_input = tag_input.on_input(|typed| Message::Core(Msg::TagInputChanged(typed)));
    }
    let tag_row = row![text("Filter by tag:"), tag_input]
        .spacing(10)
        .align_y(Alignment::Center);

    let suggestions = view.visible_tags.iter().take(MAX_SUGGESTIONS).map(|tag| {
        Element::from(
            button(text(tag.as_str()).size(14))
                .style(button::text)
                .padding([2, 6])
                .on_press_maybe(
                    controls
                        .tag_input
                        .then(|| Message::Core(Msg::TagSelected(tag.clone()))),
                ),
        )
    });
    let suggestions = scrollable(Column::with_children(suggestions).spacing(2))
        .height(Length::Fixed(SUGGESTION_LIST_HEIGHT))
        .width(Length::Fill);

    let mut overlay_input =
        text_input("Text to print on the cat", &view.selection.overlay_text).padding(6);
    if controls.text_input {
        overlay_input =
            overlay_input.on_input(|typed| Message::Core(Msg::OverlayTextChanged(typed)));
    }

    let size_picker: Element<'a, Message> = if controls.font_size {
        pick_list(FontSize::ALL, view.selection.font_size, |size| {
            Message::Core(Msg::FontSizeSelected(size))
        })
        .into()
    } else {
        text(option_label(view.selection.font_size)).into()
    };
    let color_picker: Element<'a, Message> = if controls.font_color {
        pick_list(FontColor::ALL, view.selection.font_color, |color| {
            Message::Core(Msg::FontColorSelected(color))
        })
        .into()
    } else {
        text(option_label(view.selection.font_color)).into()
    };

    let overlay_section = container(
        column![
            text("Add text to the image").size(16),
            row![text("Text:"), overlay_input]
                .spacing(10)
                .align_y(Alignment::Center),
            row![text("Size:"), size_picker, text("Color:"), color_picker]
                .spacing(10)
                .align_y(Alignment::Center),
        ]
        .spacing(8),
    )
    .padding(10)
    .style(container::rounded_box)
    .width(Length::Fill);

    let status = if view.status.is_empty() {
        preview_error.unwrap_or_default()
    } else {
        view.status.as_str()
    };
    let picture = match (preview, &view.image) {
        (Some(handle), Some(_)) => Some(Image::<Handle>::new(handle.clone())),
        _ => None,
    };

    let buttons = row![
        button("Next cat")
            .padding([8, 16])
            .on_press_maybe(controls.fetch_button.then_some(Message::Core(Msg::FetchImageClicked))),
        button("Close")
            .padding([8, 16])
            .style(button::secondary)
            .on_press_maybe(controls.close_button.then_some(Message::Core(Msg::CloseClicked))),
    ]
    .spacing(30);

    let image_column: Column<'a, Message> = Column::new()
        .push(text(status))
        .push_maybe(picture)
        .push(buttons)
        .spacing(20)
        .padding(10)
        .align_x(Alignment::Center)
        .width(Length::Fill);
    let image_area = scrollable(image_column).height(Length::Fill);

    column![tag_row, suggestions, overlay_section, image_area]
        .spacing(15)
        .padding(15)
        .into()
}

fn option_label<T: ToString>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
