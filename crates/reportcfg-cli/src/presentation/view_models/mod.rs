pub mod common;
pub mod report;
pub mod result;
pub mod system;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use report::{
    CatalogDimensionViewModel, CatalogViewModel, CheckViewModel, LabelViewModel,
    OptionViewModel, OptionsViewModel, StageViewModel, UpdateViewModel,
};
pub use result::{CommandResultViewModel, CreateView, ViewStyle};
pub use system::{InitViewModel, TickStepViewModel, TicksViewModel};
