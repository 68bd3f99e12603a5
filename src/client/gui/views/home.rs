use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;

// Consistent palette with loading and results views
const BG_MAIN: Color = Color::from_rgb(0.40, 0.44, 0.92); // Indigo gradient base
const CARD_BG: Color = Color::from_rgb(0.97, 0.97, 1.0); // Near-white card bodies
const DROP_BG: Color = Color::from_rgb(0.93, 0.94, 1.0);
const DROP_ACTIVE_BG: Color = Color::from_rgb(0.85, 0.88, 1.0);
const ACCENT_COLOR: Color = Color::from_rgb(0.40, 0.44, 0.92);
const TEXT_PRIMARY: Color = Color::from_rgb(0.15, 0.15, 0.2);
const TEXT_SECONDARY: Color = Color::from_rgb(0.45, 0.45, 0.5);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
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
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        },
    }
}

fn drop_zone_appearance(active: bool) -> impl Fn(&iced::Theme) -> iced::widget::container::Appearance {
    move |_| iced::widget::container::Appearance {
        background: Some(iced::Background::Color(if active {
            DROP_ACTIVE_BG
        } else {
            DROP_BG
        })),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 2.0,
            color: if active {
                ACCENT_COLOR
            } else {
                Color::from_rgb(0.75, 0.78, 0.95)
            },
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(hovering_file: bool) -> Element<'static, Message> {
    let title = Text::new("Find Products with AI-Powered Image Search")
        .size(34)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new(
        "Upload a photo and discover matching products across multiple marketplaces.",
    )
    .size(16)
    .style(TEXT_SECONDARY)
    .horizontal_alignment(iced::alignment::Horizontal::Center);

    // Left card: drop zone
    let drop_zone_body: Element<Message> = Column::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(
            Text::new(if hovering_file {
                "Release to search"
            } else {
                "Drop an image here"
            })
            .size(18)
            .font(BOLD_FONT)
            .style(if hovering_file { ACCENT_COLOR } else { TEXT_PRIMARY }),
        )
        .push(
            Text::new("PNG, JPG, JPEG, GIF or WEBP, one file")
                .size(13)
                .style(TEXT_SECONDARY),
        )
        .into();

    let drop_zone = Container::new(drop_zone_body)
        .width(Length::Fixed(300.0))
        .height(Length::Fixed(240.0))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(
            drop_zone_appearance(hovering_file),
        )));

    // Right card: native file picker
    let browse_card = Container::new(
        Column::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(Text::new("Or pick a photo").size(18).font(BOLD_FONT).style(TEXT_PRIMARY))
            .push(
                Text::new("Choose an image from your computer")
                    .size(13)
                    .style(TEXT_SECONDARY),
            )
            .push(
                Button::new(
                    Text::new("Browse files")
                        .size(16)
                        .horizontal_alignment(iced::alignment::Horizontal::Center),
                )
                .on_press(Message::BrowseImage)
                .style(iced::theme::Button::Primary)
                .padding([12, 24]),
            ),
    )
    .width(Length::Fixed(300.0))
    .height(Length::Fixed(240.0))
    .center_x()
    .center_y()
    .style(iced::theme::Container::Custom(Box::new(
        drop_zone_appearance(false),
    )));

    let upload_row = Row::new()
        .spacing(24)
        .align_items(Alignment::Center)
        .push(drop_zone)
        .push(browse_card);

    let hero = Container::new(
        Column::new()
            .spacing(20)
            .padding(40)
            .align_items(Alignment::Center)
            .push(title)
            .push(subtitle)
            .push(Space::new(Length::Fill, Length::Fixed(8.0)))
            .push(upload_row),
    )
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let content = Container::new(hero)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .padding(32);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
