//! Kingdom governance error types.

use realmkeeper_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum KingdomError {
    #[error("Kingdom not found: {0}")]
    NotFound(String),
    #[error("A kingdom named {0} already exists")]
    NameTaken(String),
    #[error("Player is already in a kingdom")]
    AlreadyAffiliated,
    #[error("Player is not in a kingdom")]
    NotAffiliated,
    #[error("Only the kingdom leader can do that")]
    NotLeader,
    #[error("Player is not a member of this kingdom")]
    NotMember,
    #[error("The leader cannot be kicked from their own kingdom")]
    CannotKickLeader,
    #[error("The leader must transfer leadership before leaving")]
    LeaderCannotLeave,
    #[error("This kingdom is not accepting join requests")]
    RequestsClosed,
    #[error("A join request is already pending")]
    AlreadyRequested,
    #[error("No pending join request from that player")]
    NoSuchRequest,
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
