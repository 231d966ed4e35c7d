//! Kingdom governance use cases
//!
//! Founding, membership, leadership, and the join-request queue. Every
//! mutation goes through the registries owned by the running app and is
//! persisted before the corresponding event goes out.

pub mod create_kingdom;
pub mod delete_kingdom;
pub mod error;
pub mod kick_member;
pub mod leave_kingdom;
pub mod queries;
pub mod rename_kingdom;
pub mod request_join;
pub mod review_requests;
pub mod toggle_requests;
pub mod transfer_leadership;

pub use create_kingdom::CreateKingdom;
pub use delete_kingdom::DeleteKingdom;
pub use error::KingdomError;
pub use kick_member::KickMember;
pub use leave_kingdom::LeaveKingdom;
pub use queries::{KingdomInfo, KingdomInfoOutput, ListKingdoms};
pub use rename_kingdom::RenameKingdom;
pub use request_join::RequestJoin;
pub use review_requests::{
    AcceptAllRequests, AcceptRequest, DenyAllRequests, DenyRequest, ListRequests,
};
pub use toggle_requests::SetAcceptingRequests;
pub use transfer_leadership::TransferLeadership;

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, NotifierPort};

/// Container for all kingdom use cases
pub struct KingdomUseCases {
    pub create_kingdom: Arc<CreateKingdom>,
    pub delete_kingdom: Arc<DeleteKingdom>,
    pub transfer_leadership: Arc<TransferLeadership>,
    pub rename_kingdom: Arc<RenameKingdom>,
    pub request_join: Arc<RequestJoin>,
    pub leave_kingdom: Arc<LeaveKingdom>,
    pub kick_member: Arc<KickMember>,
    pub accept_request: Arc<AcceptRequest>,
    pub deny_request: Arc<DenyRequest>,
    pub accept_all_requests: Arc<AcceptAllRequests>,
    pub deny_all_requests: Arc<DenyAllRequests>,
    pub list_requests: Arc<ListRequests>,
    pub set_accepting_requests: Arc<SetAcceptingRequests>,
    pub kingdom_info: Arc<KingdomInfo>,
    pub list_kingdoms: Arc<ListKingdoms>,
}

impl KingdomUseCases {
    pub fn new(clock: Arc<dyn ClockPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self {
            create_kingdom: Arc::new(CreateKingdom::new(clock.clone(), notifier.clone())),
            delete_kingdom: Arc::new(DeleteKingdom::new(notifier.clone())),
            transfer_leadership: Arc::new(TransferLeadership::new(notifier.clone())),
            rename_kingdom: Arc::new(RenameKingdom::new(notifier.clone())),
            request_join: Arc::new(RequestJoin::new()),
            leave_kingdom: Arc::new(LeaveKingdom::new(notifier.clone())),
            kick_member: Arc::new(KickMember::new(notifier.clone())),
            accept_request: Arc::new(AcceptRequest::new(notifier.clone())),
            deny_request: Arc::new(DenyRequest::new()),
            accept_all_requests: Arc::new(AcceptAllRequests::new(notifier)),
            deny_all_requests: Arc::new(DenyAllRequests::new()),
            list_requests: Arc::new(ListRequests::new()),
            set_accepting_requests: Arc::new(SetAcceptingRequests::new()),
            kingdom_info: Arc::new(KingdomInfo::new(clock)),
            list_kingdoms: Arc::new(ListKingdoms::new()),
        }
    }
}
