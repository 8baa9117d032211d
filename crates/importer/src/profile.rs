use std::fmt;

use storage::DbPath;

use crate::ImporterError;

/// Where event records live in the database tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `events/<season>/<key>`
    Flat,
    /// `seasons/<season>/events/<key>`
    SeasonsPrefixed,
}

/// Which placeholder a fresh record carries for the schedule that a later
/// process fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePlaceholder {
    /// `matches: []`
    Matches,
    /// `qualMatches: []`
    QualMatches,
    /// `hasQualSchedule: false`
    QualScheduleFlag,
}

/// The orthogonal knobs distinguishing the import variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    pub path_style: PathStyle,
    pub placeholder: SchedulePlaceholder,
    pub include_ms_timestamps: bool,
    pub dedupe_by_event_code: bool,
}

impl ImportOptions {
    /// Root under which this season's event records are stored. Generated
    /// keys become direct children of this path.
    pub fn events_root(&self, season: u16) -> DbPath {
        let season = season.to_string();
        match self.path_style {
            PathStyle::Flat => DbPath::root().child("events").child(season),
            PathStyle::SeasonsPrefixed => DbPath::root()
                .child("seasons")
                .child(season)
                .child("events"),
        }
    }
}

/// Named presets covering the historical import variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportProfile {
    /// Flat `events/` tree, `matches` placeholder, no timestamps, no
    /// duplicate check.
    Flat,
    /// `seasons/` tree, `hasQualSchedule` flag, millisecond timestamps.
    QualFlag,
    /// `seasons/` tree, `qualMatches` placeholder, millisecond timestamps,
    /// skips event codes that already exist in the store.
    Dedupe,
}

impl ImportProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::QualFlag => "qual-flag",
            Self::Dedupe => "dedupe",
        }
    }

    pub fn all() -> &'static [ImportProfile] {
        &[Self::Flat, Self::QualFlag, Self::Dedupe]
    }

    pub fn options(&self) -> ImportOptions {
        match self {
            Self::Flat => ImportOptions {
                path_style: PathStyle::Flat,
                placeholder: SchedulePlaceholder::Matches,
                include_ms_timestamps: false,
                dedupe_by_event_code: false,
            },
            Self::QualFlag => ImportOptions {
                path_style: PathStyle::SeasonsPrefixed,
                placeholder: SchedulePlaceholder::QualScheduleFlag,
                include_ms_timestamps: true,
                dedupe_by_event_code: false,
            },
            Self::Dedupe => ImportOptions {
                path_style: PathStyle::SeasonsPrefixed,
                placeholder: SchedulePlaceholder::QualMatches,
                include_ms_timestamps: true,
                dedupe_by_event_code: true,
            },
        }
    }

    fn parse_str(s: &str) -> Result<Self, ImporterError> {
        let normalized = s.to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "flat" | "matches" => Ok(Self::Flat),
            "qual-flag" | "qualflag" | "flag" => Ok(Self::QualFlag),
            "dedupe" | "dedup" | "qual-matches" | "qualmatches" => Ok(Self::Dedupe),
            _ => Err(ImporterError::ImportError(format!(
                "Unknown import profile: '{}'. Available: {}",
                s,
                Self::all()
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl Default for ImportProfile {
    fn default() -> Self {
        Self::Dedupe
    }
}

impl TryFrom<&str> for ImportProfile {
    type Error = ImporterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for ImportProfile {
    type Err = ImporterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl fmt::Display for ImportProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
