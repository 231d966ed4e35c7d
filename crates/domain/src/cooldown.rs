//! Cooldown policy
//!
//! Pure time-window rules for the lifecycle and affiliation transitions.
//! Every duration rule in the system lives here: the character re-creation
//! window, the place rejoin windows, and the kingdom protection window.

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::{Affiliation, AffiliationKind, PlaceKind, PlaceName};

/// Wait before a dead player may create a new character.
pub fn new_identity_window() -> Duration {
    Duration::hours(1)
}

/// Wait before rejoining the same government/community, or a different
/// insurgent group.
pub fn rejoin_window() -> Duration {
    Duration::hours(24)
}

/// Wait before rejoining the same insurgent group.
pub fn same_insurgent_window() -> Duration {
    Duration::days(7)
}

/// How long a freshly created kingdom shields its leader from player kills.
pub fn protection_window() -> Duration {
    Duration::days(3)
}

/// Outcome of a cooldown check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownVerdict {
    Allowed,
    Blocked { remaining: Duration },
}

impl CooldownVerdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CooldownVerdict::Allowed)
    }

    fn from_window(window: Duration, since: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = window - (now - since);
        if remaining <= Duration::zero() {
            CooldownVerdict::Allowed
        } else {
            CooldownVerdict::Blocked { remaining }
        }
    }
}

/// Whether a dead player may create a new character identity yet.
///
/// A missing death timestamp means the player has never died; no wait.
pub fn can_create_identity(
    death_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> CooldownVerdict {
    match death_at {
        Some(since) => CooldownVerdict::from_window(new_identity_window(), since, now),
        None => CooldownVerdict::Allowed,
    }
}

/// Whether a player may join the given catalog place.
///
/// Rules apply only when both a death timestamp and a last place are on
/// record; fresh players and refugees always pass. Name comparison is
/// case-insensitive.
pub fn can_join(
    kind: PlaceKind,
    name: &PlaceName,
    last_place: Option<&Affiliation>,
    death_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> CooldownVerdict {
    let (Some(last), Some(since)) = (last_place, death_at) else {
        return CooldownVerdict::Allowed;
    };

    let same_name = last.matches_name(name);
    let window = match (AffiliationKind::from(kind), last.kind()) {
        (AffiliationKind::Government, AffiliationKind::Government) if same_name => {
            Some(rejoin_window())
        }
        (AffiliationKind::Insurgent, AffiliationKind::Insurgent) => Some(if same_name {
            same_insurgent_window()
        } else {
            rejoin_window()
        }),
        (AffiliationKind::Community, AffiliationKind::Community) if same_name => {
            Some(rejoin_window())
        }
        _ => None,
    };

    match window {
        Some(window) => CooldownVerdict::from_window(window, since, now),
        None => CooldownVerdict::Allowed,
    }
}

/// Render a remaining duration the way players see it: "2d 5h", "3h 12m",
/// or "45m".
pub fn format_remaining(remaining: Duration) -> String {
    let days = remaining.num_days();
    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes();
    if days > 0 {
        format!("{}d {}h", days, hours - days * 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes - hours * 60)
    } else {
        format!("{}m", minutes.max(0))
    }
}
