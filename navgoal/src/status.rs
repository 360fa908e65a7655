use std::fmt;

/// Status of a goal as reported by an actionlib server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GoalStatus {
    Pending,
    Active,
    Preempted,
    Succeeded,
    Aborted,
    Rejected,
    Preempting,
    Recalling,
    Recalled,
    Lost,
    /// A code outside the known enumeration.
    Other(u8),
}

impl GoalStatus {
    pub const PENDING: u8 = 0;
    pub const ACTIVE: u8 = 1;
    pub const PREEMPTED: u8 = 2;
    pub const SUCCEEDED: u8 = 3;
    pub const ABORTED: u8 = 4;
    pub const REJECTED: u8 = 5;
    pub const PREEMPTING: u8 = 6;
    pub const RECALLING: u8 = 7;
    pub const RECALLED: u8 = 8;
    pub const LOST: u8 = 9;

    pub fn from_code(code: u8) -> Self {
        match code {
            Self::PENDING => Self::Pending,
            Self::ACTIVE => Self::Active,
            Self::PREEMPTED => Self::Preempted,
            Self::SUCCEEDED => Self::Succeeded,
            Self::ABORTED => Self::Aborted,
            Self::REJECTED => Self::Rejected,
            Self::PREEMPTING => Self::Preempting,
            Self::RECALLING => Self::Recalling,
            Self::RECALLED => Self::Recalled,
            Self::LOST => Self::Lost,
            other => Self::Other(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Pending => Self::PENDING,
            Self::Active => Self::ACTIVE,
            Self::Preempted => Self::PREEMPTED,
            Self::Succeeded => Self::SUCCEEDED,
            Self::Aborted => Self::ABORTED,
            Self::Rejected => Self::REJECTED,
            Self::Preempting => Self::PREEMPTING,
            Self::Recalling => Self::RECALLING,
            Self::Recalled => Self::RECALLED,
            Self::Lost => Self::LOST,
            Self::Other(code) => *code,
        }
    }

    /// Returns true if no further status updates follow this one.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Preempted
                | Self::Succeeded
                | Self::Aborted
                | Self::Rejected
                | Self::Recalled
                | Self::Lost
        )
    }

    pub fn is_succeeded(&self) -> bool {
        *self == Self::Succeeded
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Preempted => "PREEMPTED",
            Self::Succeeded => "SUCCEEDED",
            Self::Aborted => "ABORTED",
            Self::Rejected => "REJECTED",
            Self::Preempting => "PREEMPTING",
            Self::Recalling => "RECALLING",
            Self::Recalled => "RECALLED",
            Self::Lost => "LOST",
            Self::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol(), self.code())
    }
}
