use std::path::PathBuf;
use std::sync::Arc;

use iced::{window, Application, Command, Element, Subscription, Theme};

use crate::client::config::ClientConfig;
use crate::client::models::messages::Message;
use crate::client::models::search_state::{reduce, LoadingStage, SearchAction, SearchState};
use crate::client::services::image_intake;
use crate::client::services::search_service::SearchService;

pub struct SearchApp {
    pub state: SearchState,
    pub search_service: Arc<SearchService>,
    /// True while a file is dragged over the window.
    pub hovering_file: bool,
    /// Decoded preview of the accepted image, dropped on clear.
    pub preview: Option<iced::widget::image::Handle>,
    /// Stamp of the newest upload->search flow. Settlements carrying an
    /// older stamp are discarded instead of racing on shared state.
    flow_seq: u64,
}

impl Application for SearchApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        log::info!("search backend at {}", config.api_base_url);
        let app = SearchApp {
            state: SearchState::default(),
            search_service: Arc::new(SearchService::new(&config)),
            hovering_file: false,
            preview: None,
            flow_seq: 0,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Lente - Visual Product Search".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::FileHovered => {
                self.hovering_file = true;
                Command::none()
            }
            Message::FileHoverLeft => {
                self.hovering_file = false;
                Command::none()
            }
            Message::FileDropped(path) => {
                self.hovering_file = false;
                self.accept_image(path)
            }
            Message::BrowseImage => {
                if self.state.loading {
                    return Command::none();
                }
                Command::perform(image_intake::pick_image(), Message::ImagePicked)
            }
            Message::ImagePicked(Some(path)) => self.accept_image(path),
            Message::ImagePicked(None) => {
                log::info!("file dialog dismissed");
                Command::none()
            }
            Message::ImageRead { seq, result } => {
                if seq != self.flow_seq {
                    log::info!("discarding stale image read (seq {})", seq);
                    return Command::none();
                }
                match result {
                    Ok(payload) => {
                        self.preview =
                            Some(iced::widget::image::Handle::from_memory(payload.bytes.clone()));
                        reduce(
                            &mut self.state,
                            SearchAction::LoadingStarted(LoadingStage::Uploading),
                        );
                        let service = self.search_service.clone();
                        let file_name = payload.file_name.clone();
                        Command::perform(
                            async move {
                                service
                                    .upload_image(payload)
                                    .await
                                    .map(|server_filename| (file_name, server_filename))
                                    .map_err(|e| e.to_string())
                            },
                            move |result| Message::UploadFinished { seq, result },
                        )
                    }
                    Err(message) => {
                        // Intake failure: logged only, the upload UI stays
                        // inactive (not routed through the error dialog).
                        log::warn!("could not read image: {}", message);
                        Command::none()
                    }
                }
            }
            Message::UploadFinished { seq, result } => {
                if seq != self.flow_seq {
                    log::info!("discarding stale upload settlement (seq {})", seq);
                    return Command::none();
                }
                match result {
                    Ok((file_name, server_filename)) => {
                        reduce(
                            &mut self.state,
                            SearchAction::ImageUploaded {
                                file_name,
                                server_filename: server_filename.clone(),
                            },
                        );
                        // Upload done; the dependent search step starts its
                        // own loading phase.
                        reduce(
                            &mut self.state,
                            SearchAction::LoadingStarted(LoadingStage::Analyzing),
                        );
                        let service = self.search_service.clone();
                        Command::perform(
                            async move {
                                service
                                    .search_products(&server_filename)
                                    .await
                                    .map_err(|e| e.to_string())
                            },
                            move |result| Message::SearchFinished { seq, result },
                        )
                    }
                    Err(message) => {
                        // Failed upload short-circuits the search step.
                        log::error!("upload failed: {}", message);
                        self.preview = None;
                        reduce(&mut self.state, SearchAction::Failed(message));
                        Command::none()
                    }
                }
            }
            Message::SearchFinished { seq, result } => {
                if seq != self.flow_seq {
                    log::info!("discarding stale search settlement (seq {})", seq);
                    return Command::none();
                }
                match result {
                    Ok((results, product_info)) => {
                        reduce(
                            &mut self.state,
                            SearchAction::StageChanged(LoadingStage::Compiling),
                        );
                        reduce(
                            &mut self.state,
                            SearchAction::ResultsReady {
                                results,
                                product_info,
                            },
                        );
                        Command::none()
                    }
                    Err(message) => {
                        log::error!("search failed: {}", message);
                        self.preview = None;
                        reduce(&mut self.state, SearchAction::Failed(message));
                        Command::none()
                    }
                }
            }
            Message::RemoveImage => {
                self.preview = None;
                reduce(&mut self.state, SearchAction::Cleared);
                Command::none()
            }
            Message::DismissError => {
                // Single acknowledge action: drop the error and return to
                // the initial upload view.
                self.preview = None;
                reduce(&mut self.state, SearchAction::Cleared);
                Command::none()
            }
            Message::CopySearchUrl(url) => {
                match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url)) {
                    Ok(()) => log::info!("search URL copied to clipboard"),
                    Err(e) => log::warn!("clipboard copy failed: {}", e),
                }
                Command::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status| match event {
            iced::Event::Window(_, window::Event::FileHovered(_)) => Some(Message::FileHovered),
            iced::Event::Window(_, window::Event::FilesHoveredLeft) => {
                Some(Message::FileHoverLeft)
            }
            iced::Event::Window(_, window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            _ => None,
        })
    }

    fn view(&self) -> Element<Message> {
        if let Some(error) = &self.state.error {
            crate::client::gui::widgets::error_modal::view(error)
        } else if self.state.loading {
            crate::client::gui::views::loading::view(&self.state)
        } else if self.state.search_results.is_some() {
            crate::client::gui::views::results::view(&self.state, self.preview.as_ref())
        } else {
            crate::client::gui::views::home::view(self.hovering_file)
        }
    }
}

impl SearchApp {
    /// Validates a picked or dropped file and starts a new upload->search
    /// flow for it. A new image overwrites the previous session's state.
    fn accept_image(&mut self, path: PathBuf) -> Command<Message> {
        if self.state.loading {
            log::info!("ignoring {} while a search is in flight", path.display());
            return Command::none();
        }
        if !image_intake::is_allowed_image(&path) {
            log::warn!(
                "rejected {}: allowed types are {}",
                path.display(),
                image_intake::ALLOWED_EXTENSIONS.join(", ")
            );
            return Command::none();
        }

        self.preview = None;
        reduce(&mut self.state, SearchAction::Cleared);
        self.flow_seq += 1;
        let seq = self.flow_seq;
        Command::perform(
            async move { image_intake::read_image(path).await.map_err(|e| e.to_string()) },
            move |result| Message::ImageRead { seq, result },
        )
    }
}
