pub mod config;
pub mod controller;
pub mod dashboard;
pub mod notice;
pub mod render;
pub mod view;

pub use config::DashboardConfig;
pub use controller::{
    ControllerEvent, Generation, NetworkError, RequestController, SubmissionState, SubmitError,
    Ticket, Transition,
};
pub use dashboard::Dashboard;
pub use notice::{Notice, NoticeChannel, NoticeKind};
pub use render::{render_gauge_line, render_json, render_text};
pub use view::{ActionControl, DashboardView, ResultsView, derive_view};
