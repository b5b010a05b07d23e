pub mod analytics;
pub mod contacts;
pub mod dashboard;
pub mod follow_ups;
pub mod market;
pub mod outreach;
pub mod settings;
pub mod tools;
pub mod transactions;
pub mod vehicles;

pub use analytics::analytics_page;
pub use contacts::contacts_page;
pub use dashboard::dashboard_page;
pub use follow_ups::follow_ups_page;
pub use market::{market_page, market_results_page};
pub use outreach::{inquiry_preview_page, inquiry_sent_page};
pub use settings::settings_page;
pub use tools::{offer_preview_page, pitch_preview_page, tools_page, EstimateVm, MmrVm};
pub use transactions::transactions_page;
pub use vehicles::vehicles_page;
