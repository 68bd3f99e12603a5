use iced::widget::{Column, Container, ProgressBar, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;
use crate::client::models::search_state::SearchState;

const OVERLAY_BG: Color = Color::from_rgb(0.12, 0.12, 0.18);
const CARD_BG: Color = Color::from_rgb(0.97, 0.97, 1.0);
const ACCENT_COLOR: Color = Color::from_rgb(0.40, 0.44, 0.92);
const DONE_COLOR: Color = Color::from_rgb(0.15, 0.68, 0.38);
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
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 20.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 24.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
        },
    }
}

fn step_appearance(active: bool, completed: bool) -> impl Fn(&iced::Theme) -> iced::widget::container::Appearance {
    move |_| iced::widget::container::Appearance {
        background: Some(iced::Background::Color(if completed {
            Color::from_rgba(0.15, 0.68, 0.38, 0.12)
        } else if active {
            Color::from_rgba(0.40, 0.44, 0.92, 0.12)
        } else {
            Color::from_rgba(0.0, 0.0, 0.0, 0.04)
        })),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: if completed {
                DONE_COLOR
            } else if active {
                ACCENT_COLOR
            } else {
                Color::from_rgb(0.85, 0.85, 0.9)
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

const STEPS: [(u8, &str); 3] = [
    (1, "Uploading image"),
    (2, "Analyzing product with AI"),
    (3, "Compiling results"),
];

fn step_row<'a>(number: u8, label: &'a str, current: u8) -> Element<'a, Message> {
    let active = number == current;
    let completed = number < current;
    let marker = if completed { "✓".to_string() } else { number.to_string() };

    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(
                Text::new(marker)
                    .size(14)
                    .font(BOLD_FONT)
                    .style(if completed {
                        DONE_COLOR
                    } else if active {
                        ACCENT_COLOR
                    } else {
                        TEXT_SECONDARY
                    }),
            )
            .push(Text::new(label).size(14).style(TEXT_PRIMARY)),
    )
    .width(Length::Fill)
    .padding(12)
    .style(iced::theme::Container::Custom(Box::new(step_appearance(
        active, completed,
    ))))
    .into()
}

pub fn view(state: &SearchState) -> Element<Message> {
    let stage = state.loading_stage;
    let current = stage.step();

    let title = Text::new(stage.to_string())
        .size(22)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new("Searching marketplaces for the best matches")
        .size(14)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let progress = ProgressBar::new(0.0..=1.0, stage.progress()).height(Length::Fixed(6.0));

    let mut steps = Column::new().spacing(10);
    for (number, label) in STEPS {
        steps = steps.push(step_row(number, label, current));
    }

    let card = Container::new(
        Column::new()
            .spacing(20)
            .padding(36)
            .width(Length::Fixed(460.0))
            .align_items(Alignment::Center)
            .push(title)
            .push(subtitle)
            .push(progress)
            .push(steps),
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
