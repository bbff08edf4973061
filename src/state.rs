use crate::color::CategoryColors;
use crate::config::SliderConfig;
use crate::data::aggregate::{OutcomeAggregate, aggregate};
use crate::data::filter::filtered_indices;
use crate::data::model::{LaunchTable, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Input events
// ---------------------------------------------------------------------------

/// Changes the UI reports back to the dashboard state.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// Site dropdown changed; recomputes pie and scatter.
    SiteSelected(SiteSelection),
    /// Payload range changed; recomputes the scatter only.
    PayloadRangeChanged(PayloadRange),
    /// A different dataset was opened; resets both inputs.
    DatasetLoaded(LaunchTable),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Inputs (`selected_site`, `payload_range`) only change through
/// [`AppState::handle`]; the derived chart data is recomputed there.
pub struct AppState {
    /// Loaded dataset, read-only after load.
    pub table: LaunchTable,

    /// Slider settings as configured, before fitting to a dataset.
    configured_slider: SliderConfig,

    /// Slider settings fitted to the current dataset.
    pub slider: SliderConfig,

    /// Dropdown value.
    pub selected_site: SiteSelection,

    /// Slider value.
    pub payload_range: PayloadRange,

    /// Pie chart rows for `selected_site`.
    pub pie: OutcomeAggregate,

    /// Indices of records shown in the scatter plot.
    pub scatter_indices: Vec<usize>,

    /// Colours per booster category.
    pub booster_colors: CategoryColors,

    /// Colours per pie label (site names, then outcome classes).
    pub slice_colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Text typed into the site dropdown's search box.
    pub site_search: String,
}

impl AppState {
    /// Build the state for a freshly loaded table, with "All Sites" selected
    /// and the slider at its initial range.
    pub fn new(table: LaunchTable, configured_slider: &SliderConfig) -> Self {
        let slider = configured_slider.fitted_to(table.min_payload(), table.max_payload());
        let selected_site = SiteSelection::All;
        let payload_range = slider.initial;

        let pie = aggregate(&table, &selected_site);
        let scatter_indices = filtered_indices(&table, &selected_site, payload_range);

        Self {
            booster_colors: CategoryColors::new(table.booster_categories().iter().cloned()),
            slice_colors: slice_colors_for(&table),
            table,
            configured_slider: configured_slider.clone(),
            slider,
            selected_site,
            payload_range,
            pie,
            scatter_indices,
            status_message: None,
            site_search: String::new(),
        }
    }

    /// Apply one input change and recompute what depends on it.
    pub fn handle(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::SiteSelected(site) => {
                if site == self.selected_site {
                    return;
                }
                log::debug!("Site selected: {site}");
                self.selected_site = site;
                self.recompute_pie();
                self.recompute_scatter();
            }
            DashboardEvent::PayloadRangeChanged(range) => {
                if range == self.payload_range {
                    return;
                }
                log::debug!("Payload range changed: {range}");
                self.payload_range = range;
                self.recompute_scatter();
            }
            DashboardEvent::DatasetLoaded(table) => {
                let configured = self.configured_slider.clone();
                *self = Self::new(table, &configured);
            }
        }
    }

    /// Recompute the pie rows from `selected_site`.
    fn recompute_pie(&mut self) {
        self.pie = aggregate(&self.table, &self.selected_site);
        log::debug!("Pie chart: {} slices, total {}", self.pie.len(), self.pie.total());
    }

    /// Recompute the scatter rows from `selected_site` and `payload_range`.
    fn recompute_scatter(&mut self) {
        self.scatter_indices =
            filtered_indices(&self.table, &self.selected_site, self.payload_range);
        log::debug!("Scatter plot: {} launches", self.scatter_indices.len());
    }

    /// Dropdown entries whose label contains the search text (case-insensitive).
    /// "All Sites" is always offered.
    pub fn visible_site_options(&self) -> Vec<SiteSelection> {
        let needle = self.site_search.trim().to_lowercase();
        self.table
            .site_options()
            .into_iter()
            .filter(|opt| {
                needle.is_empty()
                    || *opt == SiteSelection::All
                    || opt.label().to_lowercase().contains(&needle)
            })
            .collect()
    }
}

/// Pie slice colours: one per site, plus the two outcome classes.
fn slice_colors_for(table: &LaunchTable) -> CategoryColors {
    let mut labels: Vec<String> = table.sites().to_vec();
    labels.sort();
    labels.push("0".to_string());
    labels.push("1".to_string());
    CategoryColors::new(labels)
}
