//! Workshop track catalog
//!
//! Each hackathon track pairs a bundled civic dataset with three sample
//! questions for the RAG demo. The set is fixed; the audience votes on which
//! one goes on stage.

use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum TrackKey {
    /// EcoHack: environment & climate
    Eco,
    /// CityHack: civic services (default)
    #[default]
    City,
    /// EduHack: education equity
    Edu,
    /// JusticeHack: criminal justice reform
    Justice,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Track {
    pub(crate) key: TrackKey,
    pub(crate) name: &'static str,
    pub(crate) file: &'static str,
    pub(crate) queries: [&'static str; 3],
}

pub(crate) const TRACKS: [Track; 4] = [
    Track {
        key: TrackKey::Eco,
        name: "EcoHack",
        file: "ecohack_boston_environment.txt",
        queries: [
            "Which Boston neighborhoods have the worst air quality and why?",
            "What are the biggest environmental justice concerns in this data?",
            "How is climate change specifically threatening Boston's coastline?",
        ],
    },
    Track {
        key: TrackKey::City,
        name: "CityHack",
        file: "cityhack_boston_311.txt",
        queries: [
            "Which neighborhoods have the longest 311 response times and what are the equity implications?",
            "What are the biggest service gaps for non-English speaking residents?",
            "What patterns suggest systemic inequity in city service delivery?",
        ],
    },
    Track {
        key: TrackKey::Edu,
        name: "EduHack",
        file: "eduhack_boston_schools.txt",
        queries: [
            "What are the most significant achievement gaps in Boston public schools?",
            "How does transportation affect student attendance and outcomes?",
            "What technology access barriers exist for students and teachers?",
        ],
    },
    Track {
        key: TrackKey::Justice,
        name: "JusticeHack",
        file: "justicehack_ma_justice.txt",
        queries: [
            "What racial disparities exist in pretrial detention in Massachusetts?",
            "How effective are reentry programs at reducing recidivism?",
            "What does the data reveal about policing patterns in Boston?",
        ],
    },
];

impl TrackKey {
    pub(crate) fn track(self) -> &'static Track {
        match self {
            TrackKey::Eco => &TRACKS[0],
            TrackKey::City => &TRACKS[1],
            TrackKey::Edu => &TRACKS[2],
            TrackKey::Justice => &TRACKS[3],
        }
    }

    /// CLI-facing slug, as accepted by [`TrackKey::parse`].
    pub(crate) fn slug(self) -> &'static str {
        match self {
            TrackKey::Eco => "eco",
            TrackKey::City => "city",
            TrackKey::Edu => "edu",
            TrackKey::Justice => "justice",
        }
    }

    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        match input.to_ascii_lowercase().as_str() {
            "eco" => Ok(TrackKey::Eco),
            "city" => Ok(TrackKey::City),
            "edu" => Ok(TrackKey::Edu),
            "justice" => Ok(TrackKey::Justice),
            _ => Err(AppError::UnknownTrack {
                input: input.to_string(),
            }),
        }
    }
}

impl Track {
    pub(crate) fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file)
    }
}
