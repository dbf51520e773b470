use std::collections::HashMap;

use eframe::egui::Color32;

/// Fixed bucket for entries that carry no company affiliation.
pub const UNAFFILIATED: &str = "unaffiliated";

/// Narrative type of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Moment,
    Prophecy,
    Culture,
    Onsite,
    Inspiration,
    History,
    DarkMoment,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Moment,
        Category::Prophecy,
        Category::Culture,
        Category::Onsite,
        Category::Inspiration,
        Category::History,
        Category::DarkMoment,
        Category::Other,
    ];

    /// Parses the dataset tag; unknown tags are handled by the loader.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "moment" => Some(Self::Moment),
            "prophecy" => Some(Self::Prophecy),
            "culture" => Some(Self::Culture),
            "onsite" => Some(Self::Onsite),
            "inspiration" => Some(Self::Inspiration),
            "history" => Some(Self::History),
            "darkmoment" => Some(Self::DarkMoment),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Moment => "moment",
            Self::Prophecy => "prophecy",
            Self::Culture => "culture",
            Self::Onsite => "onsite",
            Self::Inspiration => "inspiration",
            Self::History => "history",
            Self::DarkMoment => "darkmoment",
            Self::Other => "other",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Moment => "That moment",
            Self::Prophecy => "Prophecy capsule",
            Self::Culture => "Team culture",
            Self::Onsite => "On site",
            Self::Inspiration => "Flash of insight",
            Self::History => "Looking back",
            Self::DarkMoment => "Darkest hour",
            Self::Other => "Other",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Self::Moment => Color32::from_rgb(59, 130, 246),
            Self::Prophecy => Color32::from_rgb(139, 92, 246),
            Self::Culture => Color32::from_rgb(245, 158, 11),
            Self::Onsite => Color32::from_rgb(16, 185, 129),
            Self::Inspiration => Color32::from_rgb(6, 182, 212),
            Self::History => Color32::from_rgb(249, 115, 22),
            Self::DarkMoment => Color32::from_rgb(239, 68, 68),
            Self::Other => Color32::from_rgb(107, 114, 128),
        }
    }
}

/// One submitted record. Normalized at load time; the renderer treats the
/// collection as read-only and only the endorse action mutates `engagement`.
#[derive(Clone, Debug)]
pub struct Entry {
    pub id: String,
    pub text: String,
    pub category: Category,
    pub author: String,
    pub company: String,
    pub year: i32,
    pub engagement: u32,
}

const COMPANY_PALETTE: [Color32; 8] = [
    Color32::from_rgb(239, 68, 68),
    Color32::from_rgb(59, 130, 246),
    Color32::from_rgb(16, 185, 129),
    Color32::from_rgb(139, 92, 246),
    Color32::from_rgb(245, 158, 11),
    Color32::from_rgb(6, 182, 212),
    Color32::from_rgb(249, 115, 22),
    Color32::from_rgb(107, 114, 128),
];

/// Distinct-company ordering derived from the full dataset.
///
/// Lane indices are assigned in first-appearance order and stay stable while
/// filters change, so an entry never jumps lanes when the view narrows.
#[derive(Clone, Debug, Default)]
pub struct CompanyLanes {
    order: Vec<String>,
    index: HashMap<String, usize>,
}

impl CompanyLanes {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut lanes = Self::default();
        for entry in entries {
            if !lanes.index.contains_key(&entry.company) {
                lanes.index.insert(entry.company.clone(), lanes.order.len());
                lanes.order.push(entry.company.clone());
            }
        }
        lanes
    }

    pub fn lane(&self, company: &str) -> usize {
        self.index.get(company).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn companies(&self) -> &[String] {
        &self.order
    }

    pub fn color(&self, company: &str) -> Color32 {
        COMPANY_PALETTE[self.lane(company) % COMPANY_PALETTE.len()]
    }
}

/// The loaded dataset plus the lane table derived from it.
#[derive(Clone, Debug)]
pub struct Board {
    pub entries: Vec<Entry>,
    pub lanes: CompanyLanes,
}

impl Board {
    pub fn new(entries: Vec<Entry>) -> Self {
        let lanes = CompanyLanes::from_entries(&entries);
        Self { entries, lanes }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entry_by_id(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entry_by_id_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    /// Observed year span, None for an empty board.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let mut years = self.entries.iter().map(|entry| entry.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(min, max), year| {
            (min.min(year), max.max(year))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, company: &str) -> Entry {
        Entry {
            id: id.to_owned(),
            text: String::new(),
            category: Category::Moment,
            author: "tester".to_owned(),
            company: company.to_owned(),
            year: 2024,
            engagement: 0,
        }
    }

    #[test]
    fn lanes_follow_first_appearance_order() {
        let entries = vec![
            entry("1", "orion"),
            entry("2", "vega"),
            entry("3", "orion"),
            entry("4", "lyra"),
        ];
        let lanes = CompanyLanes::from_entries(&entries);

        assert_eq!(lanes.len(), 3);
        assert_eq!(lanes.lane("orion"), 0);
        assert_eq!(lanes.lane("vega"), 1);
        assert_eq!(lanes.lane("lyra"), 2);
    }

    #[test]
    fn lane_colors_are_stable_per_company() {
        let entries = vec![entry("1", "orion"), entry("2", "vega")];
        let lanes = CompanyLanes::from_entries(&entries);
        assert_eq!(lanes.color("orion"), lanes.color("orion"));
        assert_ne!(lanes.color("orion"), lanes.color("vega"));
    }

    #[test]
    fn year_span_covers_min_and_max() {
        let mut entries = vec![entry("1", "orion"), entry("2", "vega")];
        entries[0].year = 2019;
        entries[1].year = 2031;
        let board = Board::new(entries);
        assert_eq!(board.year_span(), Some((2019, 2031)));
        assert_eq!(Board::new(Vec::new()).year_span(), None);
    }

    #[test]
    fn category_tags_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.tag()), Some(category));
        }
        assert_eq!(Category::parse("galaxy-brain"), None);
    }
}
