//! Event binder for Rango's page widgets.
//!
//! Wires three interactions on a mounted [`Page`] to the fragment endpoints:
//!
//! | Action  | Trigger              | Endpoint              | Target        | Hides trigger |
//! |---------|----------------------|-----------------------|---------------|---------------|
//! | Like    | click `#likes`       | `/like_category/`     | `#like-count` | yes           |
//! | Suggest | keyup `#suggestion`  | `/suggest_category/`  | `#cats`       | no            |
//! | AddPage | click `.rango-add`   | `/auto_add_page/`     | `#pages`      | yes           |
//!
//! A [`Session`] owns the page. Each triggering event spawns one request task;
//! tasks report back over a channel and only the session mutates the page.

mod binding;
mod cancellation;
pub mod error;
mod handle;
pub mod page;
pub mod script;
mod selector;
mod session;
mod source;

pub use binding::{ActionKind, EventBinder, Trigger};
pub use cancellation::CancellationToken;
pub use error::{BinderError, Result};
pub use handle::RequestHandle;
pub use page::{Element, ElementRef, Page, TargetStatus};
pub use script::{Script, Step};
pub use selector::Selector;
pub use session::{Applied, Completion, Outcome, Session, UiEvent};
pub use source::FragmentSource;
