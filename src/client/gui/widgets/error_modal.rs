use iced::widget::{Button, Column, Container, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;

const OVERLAY_BG: Color = Color::from_rgb(0.12, 0.12, 0.18);
const CARD_BG: Color = Color::from_rgb(0.99, 0.97, 0.97);
const ERROR_COLOR: Color = Color::from_rgb(0.82, 0.22, 0.22);
const TEXT_PRIMARY: Color = Color::from_rgb(0.15, 0.15, 0.2);
const TEXT_SECONDARY: Color = Color::from_rgb(0.45, 0.45, 0.5);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn overlay_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(OVERLAY_BG)),
        text_color: Some(Color::WHITE),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: ERROR_COLOR,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 24.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
        },
    }
}

/// Blocking error dialog. The single acknowledge action clears the error
/// and returns to the upload view.
pub fn view(error: &str) -> Element<'_, Message> {
    let card = Container::new(
        Column::new()
            .spacing(16)
            .padding(32)
            .width(Length::Fixed(420.0))
            .align_items(Alignment::Center)
            .push(Text::new("Error").size(22).font(BOLD_FONT).style(ERROR_COLOR))
            .push(
                Text::new("Something went wrong while processing your request. Please try again.")
                    .size(14)
                    .style(TEXT_SECONDARY)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
            )
            .push(
                Text::new(error)
                    .size(14)
                    .style(TEXT_PRIMARY)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
            )
            .push(
                Button::new(
                    Text::new("OK")
                        .size(15)
                        .horizontal_alignment(iced::alignment::Horizontal::Center),
                )
                .on_press(Message::DismissError)
                .style(iced::theme::Button::Primary)
                .padding([10, 32]),
            ),
    )
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(overlay_appearance)))
        .into()
}
