/// Sleep stage scored for one epoch
///
/// Plot codes follow conventional hypnogram ordering: wake at the top of the
/// inverted axis, REM between wake and N1, then deepening non-REM below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SleepStage {
    Wake,
    Rem,
    N1,
    N2,
    N3,
}

impl SleepStage {
    /// Plot ordinate for this stage: WK=0, REM=1, N1=2, N2=3, N3=4
    pub fn code(&self) -> u8 {
        match self {
            SleepStage::Wake => 0,
            SleepStage::Rem => 1,
            SleepStage::N1 => 2,
            SleepStage::N2 => 3,
            SleepStage::N3 => 4,
        }
    }

    /// Axis tick label shown on the hypnogram stage axis
    pub fn axis_label(&self) -> &'static str {
        match self {
            SleepStage::Wake => "W",
            SleepStage::Rem => "REM",
            SleepStage::N1 => "N1",
            SleepStage::N2 => "N2",
            SleepStage::N3 => "N3",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(SleepStage::Wake),
            1 => Some(SleepStage::Rem),
            2 => Some(SleepStage::N1),
            3 => Some(SleepStage::N2),
            4 => Some(SleepStage::N3),
            _ => None,
        }
    }

    /// All stages in plot-code order
    pub fn all() -> [SleepStage; 5] {
        [
            SleepStage::Wake,
            SleepStage::Rem,
            SleepStage::N1,
            SleepStage::N2,
            SleepStage::N3,
        ]
    }
}

/// Outcome of classifying one raw stage-label field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelClass {
    /// A scored stage, retained on the timeline
    Stage(SleepStage),
    /// "NS" or blank: disconnected/noise epoch, dropped without error
    Excluded,
    /// Not part of the scoring vocabulary; callers treat this as corrupt input
    Unrecognized,
}

/// Classify a raw stage-label field against the fixed scoring vocabulary
///
/// The field is trimmed before lookup. The vocabulary is closed: WK, REM,
/// N1, N2, N3 are scored stages, NS and the empty string are exclusions,
/// and everything else is unrecognized.
pub fn classify_label(label: &str) -> LabelClass {
    match label.trim() {
        "WK" => LabelClass::Stage(SleepStage::Wake),
        "REM" => LabelClass::Stage(SleepStage::Rem),
        "N1" => LabelClass::Stage(SleepStage::N1),
        "N2" => LabelClass::Stage(SleepStage::N2),
        "N3" => LabelClass::Stage(SleepStage::N3),
        "NS" | "" => LabelClass::Excluded,
        _ => LabelClass::Unrecognized,
    }
}
