//! spacex-dash-charts — Chart specifications derived from the launch dataset.
//!
//! Every builder here is a pure function of the read-only dataset and the
//! current control state:
//!   - [`proportion::success_pie`]: successes per site, or outcome split for one site
//!   - [`scatter::payload_scatter`]: payload mass against outcome, colored by booster
//!   - [`layout::DashboardLayout::build`]: the static page description

pub mod control;
pub mod spec;
pub mod proportion;
pub mod scatter;
pub mod layout;

pub use control::{PayloadRange, SiteSelection};
pub use layout::DashboardLayout;
pub use proportion::success_pie;
pub use scatter::payload_scatter;
pub use spec::ChartSpec;
