use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    lente::client::gui::app::SearchApp::run(iced::Settings::default())
}
