//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod film_card;
mod filter_sidebar;
mod movie_table;
mod notice;
mod option_select;
mod page_nav;
mod range_slider;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use film_card::FilmCard;
pub use filter_sidebar::FilterSidebar;
pub use movie_table::{ColumnGlossary, MovieTable};
pub use notice::{ErrorDisplay, LoadingSpinner, Notice};
pub use option_select::OptionSelect;
pub use page_nav::PageNav;
pub use range_slider::RangeSlider;
