use reportcfg_types::Visualization;

use super::{Catalog, CatalogEntry};

/// Visualizations offered for every report subject, in menu order.
pub fn visualization_catalog() -> Catalog<Visualization> {
    Catalog::new(vec![
        CatalogEntry::single("number", "Number", Visualization::Number),
        CatalogEntry::single("table", "Table", Visualization::Table),
        CatalogEntry::single("bar", "Bar Chart", Visualization::Bar),
        CatalogEntry::single("line", "Line Chart", Visualization::Line),
        CatalogEntry::single("pie", "Pie Chart", Visualization::Pie),
        CatalogEntry::single("heat", "Heatmap", Visualization::Heat),
    ])
}
