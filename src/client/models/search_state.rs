//! The session state store and its transition set.
//!
//! A single `SearchState` lives inside the application value and is mutated
//! only through [`reduce`], a pure function over the fixed set of
//! [`SearchAction`] transitions. Views read the state by reference and
//! derive display values from it; they never write it.

use crate::client::models::api::{MarketplaceResults, ProductInfo};

/// Which remote step is currently in flight. Used only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingStage {
    #[default]
    Idle,
    Uploading,
    Uploaded,
    Analyzing,
    Compiling,
}

impl LoadingStage {
    /// Step index (1..=3) for the loading checklist.
    pub fn step(&self) -> u8 {
        match self {
            LoadingStage::Idle | LoadingStage::Uploading => 1,
            LoadingStage::Uploaded | LoadingStage::Analyzing => 2,
            LoadingStage::Compiling => 3,
        }
    }

    pub fn progress(&self) -> f32 {
        self.step() as f32 / 3.0
    }
}

impl std::fmt::Display for LoadingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LoadingStage::Idle => "Processing your image...",
            LoadingStage::Uploading => "Uploading image...",
            LoadingStage::Uploaded => "Image uploaded successfully",
            LoadingStage::Analyzing => "Analyzing product with AI...",
            LoadingStage::Compiling => "Compiling results...",
        };
        write!(f, "{}", s)
    }
}

/// The image accepted for this session, plus the reference the server
/// assigned to it on upload.
#[derive(Debug, Clone, Default)]
pub struct UploadedImage {
    /// Original file name of the picked/dropped image.
    pub file_name: String,
    /// Server-assigned filename, set once the upload succeeds.
    pub server_filename: Option<String>,
}

/// Result ordering and venue filter. Kept in state; results currently render
/// in backend order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub sort_by: SortBy,
    pub marketplace: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Price,
    EstimatedResults,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            sort_by: SortBy::default(),
            marketplace: "all".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub uploaded_image: Option<UploadedImage>,
    pub search_results: Option<MarketplaceResults>,
    pub product_info: Option<ProductInfo>,
    pub loading: bool,
    pub loading_stage: LoadingStage,
    pub error: Option<String>,
    pub filters: Filters,
}

/// The fixed transition set. Every state mutation goes through one of these.
#[derive(Debug, Clone)]
pub enum SearchAction {
    /// A remote step started: raise `loading`, set the stage, drop any
    /// previous error.
    LoadingStarted(LoadingStage),
    /// The in-flight step advanced to a new display stage.
    StageChanged(LoadingStage),
    /// The upload settled successfully with a server-assigned reference.
    ImageUploaded { file_name: String, server_filename: String },
    /// The search settled successfully. Terminal: clears loading and error.
    ResultsReady {
        results: MarketplaceResults,
        product_info: Option<ProductInfo>,
    },
    /// A remote step failed. Terminal: clears loading, stores the message.
    Failed(String),
    /// Result filters changed.
    FiltersChanged(Filters),
    /// User removed the image: reset everything from this session at once.
    Cleared,
}

/// Applies one transition. Exhaustive by construction; adding a transition
/// without handling it here is a compile error.
pub fn reduce(state: &mut SearchState, action: SearchAction) {
    match action {
        SearchAction::LoadingStarted(stage) => {
            state.loading = true;
            state.loading_stage = stage;
            state.error = None;
        }
        SearchAction::StageChanged(stage) => {
            state.loading_stage = stage;
        }
        SearchAction::ImageUploaded {
            file_name,
            server_filename,
        } => {
            state.uploaded_image = Some(UploadedImage {
                file_name,
                server_filename: Some(server_filename),
            });
            state.loading_stage = LoadingStage::Uploaded;
        }
        SearchAction::ResultsReady {
            results,
            product_info,
        } => {
            state.search_results = Some(results);
            state.product_info = product_info;
            state.loading = false;
            state.loading_stage = LoadingStage::Idle;
            state.error = None;
        }
        SearchAction::Failed(message) => {
            state.error = Some(message);
            state.loading = false;
            state.loading_stage = LoadingStage::Idle;
        }
        SearchAction::FiltersChanged(filters) => {
            state.filters = filters;
        }
        SearchAction::Cleared => {
            state.uploaded_image = None;
            state.search_results = None;
            state.product_info = None;
            state.error = None;
        }
    }
}

/// Display values derived from the held state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    pub total_marketplaces: usize,
    pub total_estimated_results: u64,
    pub product_name: String,
}

impl SearchState {
    pub fn stats(&self) -> SearchStats {
        let searches = self
            .search_results
            .as_ref()
            .map(|r| r.marketplace_searches.as_slice())
            .unwrap_or(&[]);
        SearchStats {
            total_marketplaces: searches.len(),
            total_estimated_results: searches.iter().map(|mp| mp.estimated_results).sum(),
            product_name: self
                .product_info
                .as_ref()
                .filter(|info| !info.product_name.is_empty())
                .map(|info| info.product_name.clone())
                .unwrap_or_else(|| "Unknown product".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::api::SearchResponse;

    fn results_from(json: &str) -> (MarketplaceResults, Option<ProductInfo>) {
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        (resp.marketplace_results.unwrap(), resp.product_info)
    }

    fn run_successful_flow(state: &mut SearchState, json: &str) -> Vec<bool> {
        // Loading observed after every transition of the upload -> search
        // sequence, as the GUI would see it.
        let mut observed = Vec::new();
        let mut step = |state: &mut SearchState, action: SearchAction| {
            reduce(state, action);
            observed.push(state.loading);
        };

        step(state, SearchAction::LoadingStarted(LoadingStage::Uploading));
        step(
            state,
            SearchAction::ImageUploaded {
                file_name: "shoe.jpg".into(),
                server_filename: "abc.jpg".into(),
            },
        );
        step(state, SearchAction::LoadingStarted(LoadingStage::Analyzing));
        step(state, SearchAction::StageChanged(LoadingStage::Compiling));
        let (results, product_info) = results_from(json);
        step(
            state,
            SearchAction::ResultsReady {
                results,
                product_info,
            },
        );
        observed
    }

    const SCENARIO_A: &str = r#"{
        "success": true,
        "marketplace_results": {
            "marketplace_searches": [
                {"id": 1, "name": "X", "estimated_results": 50, "search_url": "https://x"}
            ]
        },
        "product_info": {"product_name": "Shoe", "product_type": "Footwear", "brand": "Acme"}
    }"#;

    const SCENARIO_C: &str =
        r#"{"success": true, "marketplace_results": {"marketplace_searches": []}}"#;

    #[test]
    fn successful_flow_keeps_error_clear_and_terminates_loading() {
        let mut state = SearchState::default();
        let observed = run_successful_flow(&mut state, SCENARIO_A);

        // Loading holds through the intermediate transitions and drops only
        // at the terminal one.
        assert_eq!(observed, vec![true, true, true, true, false]);
        assert!(state.error.is_none());
        assert_eq!(state.loading_stage, LoadingStage::Idle);
    }

    #[test]
    fn scenario_a_derives_one_card_fifty_results_and_shoe() {
        let mut state = SearchState::default();
        run_successful_flow(&mut state, SCENARIO_A);

        let stats = state.stats();
        assert_eq!(stats.total_marketplaces, 1);
        assert_eq!(stats.total_estimated_results, 50);
        assert_eq!(stats.product_name, "Shoe");
    }

    #[test]
    fn scenario_c_yields_zero_marketplaces() {
        let mut state = SearchState::default();
        run_successful_flow(&mut state, SCENARIO_C);

        assert!(state.search_results.is_some());
        let stats = state.stats();
        assert_eq!(stats.total_marketplaces, 0);
        assert_eq!(stats.total_estimated_results, 0);
        assert_eq!(stats.product_name, "Unknown product");
    }

    #[test]
    fn failed_upload_stores_message_and_leaves_results_empty() {
        let mut state = SearchState::default();
        reduce(
            &mut state,
            SearchAction::LoadingStarted(LoadingStage::Uploading),
        );
        reduce(&mut state, SearchAction::Failed("too large".into()));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("too large"));
        assert!(state.search_results.is_none());
        assert!(state.product_info.is_none());
    }

    #[test]
    fn error_and_results_are_mutually_exclusive() {
        let mut state = SearchState::default();
        reduce(&mut state, SearchAction::Failed("boom".into()));
        assert!(state.error.is_some());

        let (results, product_info) = results_from(SCENARIO_A);
        reduce(
            &mut state,
            SearchAction::LoadingStarted(LoadingStage::Analyzing),
        );
        assert!(state.error.is_none());
        reduce(
            &mut state,
            SearchAction::ResultsReady {
                results,
                product_info,
            },
        );
        assert!(state.error.is_none());
        assert!(state.search_results.is_some());
    }

    #[test]
    fn clear_resets_all_session_fields_at_once() {
        let mut state = SearchState::default();
        run_successful_flow(&mut state, SCENARIO_A);
        reduce(&mut state, SearchAction::Failed("late error".into()));

        reduce(&mut state, SearchAction::Cleared);
        assert!(state.uploaded_image.is_none());
        assert!(state.search_results.is_none());
        assert!(state.product_info.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn filters_survive_a_clear() {
        let mut state = SearchState::default();
        reduce(
            &mut state,
            SearchAction::FiltersChanged(Filters {
                sort_by: SortBy::EstimatedResults,
                marketplace: "trendyol".into(),
            }),
        );
        reduce(&mut state, SearchAction::Cleared);

        // Clear resets session data, not display preferences.
        assert_eq!(state.filters.sort_by, SortBy::EstimatedResults);
        assert_eq!(state.filters.marketplace, "trendyol");
    }

    #[test]
    fn stage_steps_follow_the_checklist() {
        assert_eq!(LoadingStage::Uploading.step(), 1);
        assert_eq!(LoadingStage::Uploaded.step(), 2);
        assert_eq!(LoadingStage::Analyzing.step(), 2);
        assert_eq!(LoadingStage::Compiling.step(), 3);
    }
}
