use iced::widget::{Button, Column, Container, Image, Row, Scrollable, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::marketplace_card;
use crate::client::models::messages::Message;
use crate::client::models::search_state::SearchState;

const BG_MAIN: Color = Color::from_rgb(0.40, 0.44, 0.92);
const CARD_BG: Color = Color::from_rgb(0.97, 0.97, 1.0);
const STAT_BG: Color = Color::from_rgb(0.93, 0.94, 1.0);
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

fn stat_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(STAT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn stat_card<'a>(number: String, label: &'a str) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(4)
            .align_items(Alignment::Center)
            .push(Text::new(number).size(26).font(BOLD_FONT).style(ACCENT_COLOR))
            .push(Text::new(label).size(13).style(TEXT_SECONDARY)),
    )
    .width(Length::Fixed(170.0))
    .padding(16)
    .center_x()
    .style(iced::theme::Container::Custom(Box::new(stat_appearance)))
    .into()
}

pub fn view<'a>(
    state: &'a SearchState,
    preview: Option<&'a iced::widget::image::Handle>,
) -> Element<'a, Message> {
    let searches = state
        .search_results
        .as_ref()
        .map(|r| r.marketplace_searches.as_slice())
        .unwrap_or(&[]);
    let stats = state.stats();

    let title = Text::new("Search Results")
        .size(28)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY);

    let product_line: Element<Message> = if let Some(info) = &state.product_info {
        Text::new(format!(
            "Product: {} | Type: {} | Brand: {}",
            info.product_name, info.product_type, info.brand
        ))
        .size(15)
        .style(TEXT_SECONDARY)
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let stats_row = Row::new()
        .spacing(16)
        .push(stat_card(stats.total_marketplaces.to_string(), "Marketplaces"))
        .push(stat_card(
            stats.total_estimated_results.to_string(),
            "Estimated results",
        ))
        .push(stat_card(stats.product_name.clone(), "Product"));

    let body: Element<Message> = if searches.is_empty() {
        // Explicit empty state instead of an empty grid.
        Container::new(
            Column::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("No results found").size(18).font(BOLD_FONT).style(TEXT_PRIMARY))
                .push(
                    Text::new("Try a clearer photo or a different angle.")
                        .size(14)
                        .style(TEXT_SECONDARY),
                ),
        )
        .width(Length::Fill)
        .padding(32)
        .center_x()
        .into()
    } else {
        let mut grid = Column::new().spacing(12).width(Length::Fill);
        for search in searches {
            grid = grid.push(marketplace_card::view(search));
        }
        grid.into()
    };

    let header = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(title)
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Text::new("New search").size(14))
                .on_press(Message::RemoveImage)
                .style(iced::theme::Button::Secondary)
                .padding([8, 16]),
        );

    let mut content = Column::new()
        .spacing(20)
        .padding(32)
        .width(Length::Fixed(760.0))
        .push(header)
        .push(product_line);

    if let Some(handle) = preview {
        content = content.push(
            Image::new(handle.clone())
                .width(Length::Fixed(140.0))
                .height(Length::Fixed(100.0)),
        );
    }

    content = content.push(stats_row).push(body);

    let card = Container::new(content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let scroll = Scrollable::new(
        Container::new(card)
            .width(Length::Fill)
            .center_x()
            .padding(32),
    );

    Container::new(scroll)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
