use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Candidate pipeline states. Stored as text in `candidates.status` and
/// `status_history`; every mutation goes through [`CandidateStatus::can_transition_to`]
/// so call sites cannot move a candidate along an illegal edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    Shortlisted,
    ToInterview,
    InterviewScheduled,
    Interviewed,
    ToOffer,
    PendingApproval,
    OfferSent,
    OfferRejected,
    Hired,
    Rejected,
    OnHold,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::New => "new",
            CandidateStatus::Shortlisted => "shortlisted",
            CandidateStatus::ToInterview => "to_interview",
            CandidateStatus::InterviewScheduled => "interview_scheduled",
            CandidateStatus::Interviewed => "interviewed",
            CandidateStatus::ToOffer => "to_offer",
            CandidateStatus::PendingApproval => "pending_approval",
            CandidateStatus::OfferSent => "offer_sent",
            CandidateStatus::OfferRejected => "offer_rejected",
            CandidateStatus::Hired => "hired",
            CandidateStatus::Rejected => "rejected",
            CandidateStatus::OnHold => "on_hold",
        }
    }

    /// Legal targets from each state. `rejected` and `hired` are terminal;
    /// `on_hold` resumes into the pipeline states it can pause from.
    pub fn allowed_transitions(&self) -> &'static [CandidateStatus] {
        use CandidateStatus::*;
        match self {
            New => &[Shortlisted, Rejected, OnHold],
            Shortlisted => &[ToInterview, InterviewScheduled, Rejected, OnHold],
            ToInterview => &[InterviewScheduled, Rejected, OnHold],
            InterviewScheduled => &[Interviewed, ToOffer, Rejected, OnHold],
            Interviewed => &[ToOffer, Rejected, OnHold],
            ToOffer => &[PendingApproval, Rejected, OnHold],
            PendingApproval => &[OfferSent, Rejected, OnHold],
            OfferSent => &[Hired, OfferRejected, OnHold],
            OfferRejected => &[ToOffer, Rejected],
            OnHold => &[
                Shortlisted,
                ToInterview,
                InterviewScheduled,
                Interviewed,
                ToOffer,
                Rejected,
            ],
            Hired => &[],
            Rejected => &[],
        }
    }

    pub fn can_transition_to(&self, target: CandidateStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(CandidateStatus::New),
            "shortlisted" => Ok(CandidateStatus::Shortlisted),
            "to_interview" => Ok(CandidateStatus::ToInterview),
            "interview_scheduled" => Ok(CandidateStatus::InterviewScheduled),
            "interviewed" => Ok(CandidateStatus::Interviewed),
            "to_offer" => Ok(CandidateStatus::ToOffer),
            "pending_approval" => Ok(CandidateStatus::PendingApproval),
            "offer_sent" => Ok(CandidateStatus::OfferSent),
            "offer_rejected" => Ok(CandidateStatus::OfferRejected),
            "hired" => Ok(CandidateStatus::Hired),
            "rejected" => Ok(CandidateStatus::Rejected),
            "on_hold" => Ok(CandidateStatus::OnHold),
            other => Err(format!("Unknown candidate status: {}", other)),
        }
    }
}

/// Feedback decisions map onto candidate states directly.
pub fn status_for_decision(decision: &str) -> Option<CandidateStatus> {
    match decision {
        "to_offer" => Some(CandidateStatus::ToOffer),
        "on_hold" => Some(CandidateStatus::OnHold),
        "reject" => Some(CandidateStatus::Rejected),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_line_is_legal() {
        use CandidateStatus::*;
        let chain = [
            New,
            Shortlisted,
            ToInterview,
            InterviewScheduled,
            Interviewed,
            ToOffer,
            PendingApproval,
            OfferSent,
            Hired,
        ];
        for pair in chain.windows(2) {
            assert!(
                pair[0].can_transition_to(pair[1]),
                "{} -> {} should be legal",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn illegal_jumps_are_rejected() {
        use CandidateStatus::*;
        assert!(!New.can_transition_to(Hired));
        assert!(!New.can_transition_to(OfferSent));
        assert!(!Shortlisted.can_transition_to(PendingApproval));
        assert!(!Hired.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Shortlisted));
    }

    #[test]
    fn offer_rejected_only_from_offer_sent() {
        use CandidateStatus::*;
        for s in [
            New,
            Shortlisted,
            ToInterview,
            InterviewScheduled,
            Interviewed,
            ToOffer,
            PendingApproval,
            OnHold,
            Hired,
            Rejected,
        ] {
            assert!(!s.can_transition_to(OfferRejected), "{} -> offer_rejected", s);
        }
        assert!(OfferSent.can_transition_to(OfferRejected));
    }

    #[test]
    fn side_branches_reachable_from_pipeline() {
        use CandidateStatus::*;
        for s in [New, Shortlisted, ToInterview, InterviewScheduled, Interviewed, ToOffer, PendingApproval] {
            assert!(s.can_transition_to(Rejected), "{} -> rejected", s);
            assert!(s.can_transition_to(OnHold), "{} -> on_hold", s);
        }
    }

    #[test]
    fn round_trips_through_text() {
        use CandidateStatus::*;
        for s in [
            New,
            Shortlisted,
            ToInterview,
            InterviewScheduled,
            Interviewed,
            ToOffer,
            PendingApproval,
            OfferSent,
            OfferRejected,
            Hired,
            Rejected,
            OnHold,
        ] {
            assert_eq!(s.as_str().parse::<CandidateStatus>().unwrap(), s);
        }
        assert!("offer-sent".parse::<CandidateStatus>().is_err());
    }

    #[test]
    fn decision_mapping() {
        assert_eq!(status_for_decision("to_offer"), Some(CandidateStatus::ToOffer));
        assert_eq!(status_for_decision("on_hold"), Some(CandidateStatus::OnHold));
        assert_eq!(status_for_decision("reject"), Some(CandidateStatus::Rejected));
        assert_eq!(status_for_decision("maybe"), None);
    }
}
