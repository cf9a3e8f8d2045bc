use super::settings::Settings;
use super::simulator::Simulator;
use crate::Equity;
use crate::cards::Pocket;
use crate::variants::Variant;

/// Runs every variant with the same budget and keeps the best one.
#[derive(Debug, Clone)]
pub struct Selector {
    variants: Vec<Variant>,
    settings: Settings,
}

impl Default for Selector {
    fn default() -> Self {
        Self::from(Settings::default())
    }
}

impl From<Settings> for Selector {
    fn from(settings: Settings) -> Self {
        Self {
            variants: Variant::all().to_vec(),
            settings,
        }
    }
}

impl Selector {
    /// Restrict the menu, keeping the given order.
    pub fn with_variants(self, variants: Vec<Variant>) -> Self {
        assert!(!variants.is_empty(), "nothing to select from");
        Self { variants, ..self }
    }
    pub fn select(&self, pocket: Pocket) -> Selection {
        let simulator = Simulator::from((pocket, self.settings));
        log::info!(
            "simulating {} over {} variants x {} iterations",
            pocket,
            self.variants.len(),
            self.settings.iterations()
        );
        let selection = self
            .variants
            .iter()
            .map(|&variant| (variant, simulator.equity(variant)))
            .collect::<Selection>();
        log::info!("best variant for {}: {}", pocket, selection.best());
        selection
    }
}

/// The per-variant equity table and the variant that tops it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Selection {
    best: Variant,
    table: Vec<(Variant, Equity)>,
}

impl Selection {
    pub fn best(&self) -> Variant {
        self.best
    }
    pub fn table(&self) -> &[(Variant, Equity)] {
        &self.table
    }
    pub fn equity(&self, variant: Variant) -> Option<Equity> {
        self.table
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, e)| *e)
    }
}

/// Running best by strict greater-than, so the earliest entry wins ties.
impl FromIterator<(Variant, Equity)> for Selection {
    fn from_iter<I: IntoIterator<Item = (Variant, Equity)>>(iter: I) -> Self {
        let table = iter.into_iter().collect::<Vec<_>>();
        let (first, rest) = table.split_first().expect("at least one variant");
        let best = rest
            .iter()
            .fold(*first, |best, &row| if row.1 > best.1 { row } else { best })
            .0;
        Self { best, table }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (variant, equity) in &self.table {
            writeln!(f, "{:<20} {:.3}", variant, equity)?;
        }
        write!(f, "best: {}", self.best)
    }
}
