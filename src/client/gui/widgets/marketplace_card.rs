use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::api::MarketplaceSearch;
use crate::client::models::messages::Message;

const CARD_BG: Color = Color::from_rgb(1.0, 1.0, 1.0);
const ACCENT_COLOR: Color = Color::from_rgb(0.40, 0.44, 0.92);
const TEXT_PRIMARY: Color = Color::from_rgb(0.15, 0.15, 0.2);
const TEXT_SECONDARY: Color = Color::from_rgb(0.45, 0.45, 0.5);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.88, 0.89, 0.96),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 6.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
        },
    }
}

/// One marketplace venue: name, description, estimated result count and the
/// search URL with a copy action.
pub fn view(search: &MarketplaceSearch) -> Element<'_, Message> {
    let heading = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new(search.name.as_str()).size(17).font(BOLD_FONT).style(TEXT_PRIMARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Text::new(format!("~{} results", search.estimated_results))
                .size(13)
                .style(ACCENT_COLOR),
        );

    let mut details = Column::new().spacing(8).push(heading);

    if !search.description.is_empty() {
        details = details.push(Text::new(search.description.as_str()).size(13).style(TEXT_SECONDARY));
    }

    let link_row = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(
            Text::new(search.search_url.as_str())
                .size(12)
                .style(TEXT_SECONDARY)
                .width(Length::Fill),
        )
        .push(
            Button::new(Text::new("Copy link").size(13))
                .on_press(Message::CopySearchUrl(search.search_url.clone()))
                .style(iced::theme::Button::Primary)
                .padding([6, 12]),
        );

    details = details.push(link_row);

    Container::new(details)
        .width(Length::Fill)
        .padding(16)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
