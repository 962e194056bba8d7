use chrono::Duration;
use serde_json::{json, Value as JsonValue};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::notification_dto::{events, SendEmailRequest};
use crate::dto::workflow_dto::{
    DecisionPayload, FeedbackPayload, ResubmitOfferPayload, ScheduleInterviewPayload,
    SendOfferPayload, ShortlistPayload,
};
use crate::error::{Error, Result};
use crate::middleware::auth::AuthContext;
use crate::models::assignment::CandidateAssignment;
use crate::models::candidate::Candidate;
use crate::models::feedback::InterviewFeedback;
use crate::models::interview::Interview;
use crate::models::job_proposal::JobProposal;
use crate::models::user_role::{ROLE_HR_ADMIN, ROLE_HR_MANAGER};
use crate::services::assignment_service::AssignmentService;
use crate::services::candidate_service::CandidateService;
use crate::services::email_relay_service::EmailRelayService;
use crate::services::feedback_service::FeedbackService;
use crate::services::history_service::HistoryService;
use crate::services::interview_service::{InterviewService, DEFAULT_DURATION_MINUTES};
use crate::services::notification_service::NotificationService;
use crate::services::permission_service::PermissionService;
use crate::services::proposal_service::{ProposalService, OFFER_ACCEPTED, OFFER_DECLINED};
use crate::utils::time::{interview_start, to_rfc3339};
use crate::utils::validation::is_valid_national_id;
use crate::workflow::status::{status_for_decision, CandidateStatus};

/// Orchestrates every candidate state change as one ordered sequence of
/// mutations: history row first, then the status write, then the domain rows,
/// with notification fan-out last. Notifications are best-effort and never
/// gate or roll back the transition.
#[derive(Clone)]
pub struct WorkflowService {
    candidates: CandidateService,
    history: HistoryService,
    assignments: AssignmentService,
    interviews: InterviewService,
    feedback: FeedbackService,
    proposals: ProposalService,
    notifications: NotificationService,
    permissions: PermissionService,
    email_relay: EmailRelayService,
}

impl WorkflowService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            candidates: CandidateService::new(pool.clone()),
            history: HistoryService::new(pool.clone()),
            assignments: AssignmentService::new(pool.clone()),
            interviews: InterviewService::new(pool.clone()),
            feedback: FeedbackService::new(pool.clone()),
            proposals: ProposalService::new(pool.clone()),
            notifications: NotificationService::new(pool.clone()),
            permissions: PermissionService::new(pool.clone()),
            email_relay: EmailRelayService::new(pool),
        }
    }

    async fn require_candidate(&self, id: Uuid) -> Result<Candidate> {
        self.candidates
            .get(id)
            .await?
            .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))
    }

    fn current_status(candidate: &Candidate) -> Result<CandidateStatus> {
        candidate
            .status
            .parse::<CandidateStatus>()
            .map_err(Error::Internal)
    }

    /// The single gate for status changes. History is inserted before the
    /// visible status write so a crash between the two still leaves an audit
    /// trail; the two statements are sequential, not transactional.
    async fn transition(
        &self,
        candidate: &Candidate,
        target: CandidateStatus,
        actor: &AuthContext,
        note: Option<&str>,
    ) -> Result<Candidate> {
        let from = Self::current_status(candidate)?;
        if !from.can_transition_to(target) {
            return Err(Error::Conflict(format!(
                "Illegal status transition: {} -> {}",
                from, target
            )));
        }
        self.history
            .append(candidate.id, from, target, actor.user_id, &actor.email, note)
            .await?;
        self.candidates
            .update_status_row(candidate.id, target, actor.user_id, &actor.email)
            .await
    }

    /// HR-driven move to any legal target state; covers the steps with no
    /// dedicated operation (to_interview, interviewed, hired, offer_rejected,
    /// rejected, on_hold and resumes).
    pub async fn update_status(
        &self,
        candidate_id: Uuid,
        target: &str,
        note: Option<String>,
        actor: &AuthContext,
    ) -> Result<Candidate> {
        let target: CandidateStatus = target
            .parse()
            .map_err(|e: String| Error::BadRequest(e))?;
        let candidate = self.require_candidate(candidate_id).await?;
        let updated = self
            .transition(&candidate, target, actor, note.as_deref())
            .await?;

        // Terminal offer outcomes are mirrored onto the proposal record.
        if matches!(target, CandidateStatus::Hired | CandidateStatus::OfferRejected) {
            if let Some(proposal) = self.proposals.latest_for_candidate(candidate_id).await? {
                let offer_status = if target == CandidateStatus::Hired {
                    OFFER_ACCEPTED
                } else {
                    OFFER_DECLINED
                };
                self.proposals
                    .set_offer_status(proposal.id, offer_status)
                    .await?;
            }
        }
        Ok(updated)
    }

    pub async fn shortlist(
        &self,
        candidate_id: Uuid,
        payload: &ShortlistPayload,
        actor: &AuthContext,
    ) -> Result<(Candidate, CandidateAssignment)> {
        let candidate = self.require_candidate(candidate_id).await?;
        let updated = self
            .transition(
                &candidate,
                CandidateStatus::Shortlisted,
                actor,
                payload.note.as_deref(),
            )
            .await?;

        // A resume from on_hold may still carry an active assignment.
        self.assignments.deactivate_active_for(candidate_id).await?;
        let assignment = self
            .assignments
            .create(
                candidate_id,
                &payload.interviewer_name,
                &payload.interviewer_email,
                payload.note.as_deref(),
                actor.user_id,
                &actor.email,
            )
            .await?;

        Ok((updated, assignment))
    }

    /// Three branches, detected by comparing the requested interviewer with
    /// any existing scheduled interview: reschedule in place, reassign, or
    /// schedule fresh.
    pub async fn schedule_interview(
        &self,
        candidate_id: Uuid,
        payload: &ScheduleInterviewPayload,
        actor: &AuthContext,
    ) -> Result<Interview> {
        let candidate = self.require_candidate(candidate_id).await?;
        let existing = self.interviews.scheduled_for_candidate(candidate_id).await?;

        let interview = match existing {
            Some(ref current)
                if current.interviewer_email.eq_ignore_ascii_case(&payload.interviewer_email) =>
            {
                // Reschedule: mutate the row, leave status and assignment alone.
                self.interviews.reschedule(current.id, payload).await?
            }
            Some(ref current) => {
                // Reassign: cancel and supersede, never delete.
                self.interviews.cancel(current.id).await?;
                self.assignments.deactivate_active_for(candidate_id).await?;
                let note = format!(
                    "Reassigned from {} ({})",
                    current.interviewer_name, current.interviewer_email
                );
                let assignment = self
                    .assignments
                    .create(
                        candidate_id,
                        &payload.interviewer_name,
                        &payload.interviewer_email,
                        Some(&note),
                        actor.user_id,
                        &actor.email,
                    )
                    .await?;
                self.interviews
                    .create(candidate_id, assignment.id, payload)
                    .await?
            }
            None => {
                let assignment = self
                    .ensure_active_assignment(candidate_id, payload, actor)
                    .await?;
                let interview = self
                    .interviews
                    .create(candidate_id, assignment.id, payload)
                    .await?;
                if Self::current_status(&candidate)? != CandidateStatus::InterviewScheduled {
                    self.transition(
                        &candidate,
                        CandidateStatus::InterviewScheduled,
                        actor,
                        Some("Interview scheduled"),
                    )
                    .await?;
                }
                interview
            }
        };

        let data = interview_event_data(&candidate, &interview);
        self.dispatch_email(
            events::INTERVIEW_SCHEDULED,
            candidate.id,
            &interview.interviewer_email,
            Some(&interview.interviewer_name),
            data,
            actor,
        )
        .await;

        Ok(interview)
    }

    async fn ensure_active_assignment(
        &self,
        candidate_id: Uuid,
        payload: &ScheduleInterviewPayload,
        actor: &AuthContext,
    ) -> Result<CandidateAssignment> {
        if let Some(active) = self.assignments.active_for_candidate(candidate_id).await? {
            if active.interviewer_email.eq_ignore_ascii_case(&payload.interviewer_email) {
                return Ok(active);
            }
            self.assignments.deactivate_active_for(candidate_id).await?;
            let note = format!(
                "Reassigned from {} ({})",
                active.interviewer_name, active.interviewer_email
            );
            return self
                .assignments
                .create(
                    candidate_id,
                    &payload.interviewer_name,
                    &payload.interviewer_email,
                    Some(&note),
                    actor.user_id,
                    &actor.email,
                )
                .await;
        }
        self.assignments
            .create(
                candidate_id,
                &payload.interviewer_name,
                &payload.interviewer_email,
                None,
                actor.user_id,
                &actor.email,
            )
            .await
    }

    pub async fn submit_feedback(
        &self,
        interview_id: Uuid,
        payload: &FeedbackPayload,
        actor: &AuthContext,
    ) -> Result<InterviewFeedback> {
        let interview = self
            .interviews
            .get(interview_id)
            .await?
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;

        if actor.role != ROLE_HR_ADMIN
            && !interview.interviewer_email.eq_ignore_ascii_case(&actor.email)
        {
            return Err(Error::Forbidden(
                "Only the assigned interviewer can submit feedback".to_string(),
            ));
        }
        if interview.feedback_submitted {
            return Err(Error::Conflict(
                "Feedback has already been submitted for this interview".to_string(),
            ));
        }

        let target = status_for_decision(&payload.decision).ok_or_else(|| {
            Error::BadRequest("decision must be one of to_offer, on_hold, reject".to_string())
        })?;
        let scores =
            crate::workflow::rubric::score_rubric(&payload.competency_scores, &payload.core_value_scores)?;

        let feedback = self
            .feedback
            .create(
                interview.id,
                interview.candidate_id,
                &interview.interviewer_email,
                payload,
                &scores,
            )
            .await?;
        self.interviews.complete_with_feedback(interview.id).await?;

        let candidate = self.require_candidate(interview.candidate_id).await?;
        let note = format!("Interview feedback: {}", payload.decision);
        self.transition(&candidate, target, actor, Some(&note)).await?;

        // Tell the HR user who made the assignment; skipped when the
        // assignment predates actor stamping.
        if let Some(assignment) = self.assignments.get(interview.assignment_id).await? {
            if let Some(assigned_by) = assignment.assigned_by {
                self.notifications
                    .notify_best_effort(
                        assigned_by,
                        events::FEEDBACK_SUBMITTED,
                        "Interview feedback submitted",
                        &format!(
                            "{} scored {}/{} ({}%) with decision '{}'",
                            candidate.full_name,
                            scores.total_score,
                            scores.max_score,
                            scores.percentage,
                            payload.decision
                        ),
                        Some(candidate.id),
                        None,
                    )
                    .await;
            }
            if let Some(ref assigned_by_email) = assignment.assigned_by_email {
                let data = json!({
                    "candidate_name": candidate.full_name,
                    "position": candidate.position_applied,
                    "decision": payload.decision,
                    "total_score": scores.total_score,
                    "percentage": scores.percentage,
                    "interviewer_name": interview.interviewer_name,
                });
                self.dispatch_email(
                    events::FEEDBACK_SUBMITTED,
                    candidate.id,
                    assigned_by_email,
                    None,
                    data,
                    actor,
                )
                .await;
            }
        }

        Ok(feedback)
    }

    pub async fn send_offer(
        &self,
        candidate_id: Uuid,
        payload: &SendOfferPayload,
        actor: &AuthContext,
    ) -> Result<JobProposal> {
        if let Some(ref national_id) = payload.national_id {
            if !is_valid_national_id(national_id) {
                return Err(Error::BadRequest("Invalid national id format".to_string()));
            }
        }

        let candidate = self.require_candidate(candidate_id).await?;
        let current = Self::current_status(&candidate)?;
        if !current.can_transition_to(CandidateStatus::PendingApproval) {
            return Err(Error::Conflict(format!(
                "Cannot send an offer while the candidate is '{}'",
                current
            )));
        }

        let proposal = self
            .proposals
            .create(candidate_id, payload, actor.user_id, &actor.email)
            .await?;
        self.candidates
            .update_personal_fields(
                candidate_id,
                payload.national_id.as_deref(),
                payload.phone.as_deref(),
                actor.user_id,
                &actor.email,
            )
            .await?;
        self.transition(
            &candidate,
            CandidateStatus::PendingApproval,
            actor,
            Some("Offer submitted for approval"),
        )
        .await?;

        // Approval-stage emails fire from the decision handlers; submission
        // only rings the HR Manager's bell.
        match self.permissions.find_one_by_role(ROLE_HR_MANAGER).await {
            Ok(Some(manager)) => {
                self.notifications
                    .notify_best_effort(
                        manager.user_id,
                        "offer_pending_approval",
                        "Offer pending your approval",
                        &format!(
                            "{} ({}) awaits HR Manager approval",
                            candidate.full_name, proposal.position_title
                        ),
                        Some(candidate.id),
                        Some(proposal.id),
                    )
                    .await;
            }
            Ok(None) => {
                tracing::warn!("no active HR Manager found to notify about proposal {}", proposal.id)
            }
            Err(err) => tracing::warn!(error = ?err, "HR Manager lookup failed"),
        }

        Ok(proposal)
    }

    pub async fn hr_manager_decision(
        &self,
        proposal_id: Uuid,
        payload: &DecisionPayload,
        actor: &AuthContext,
    ) -> Result<JobProposal> {
        let proposal = self
            .proposals
            .get(proposal_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job proposal not found".to_string()))?;
        let candidate = self.require_candidate(proposal.candidate_id).await?;

        if payload.approve {
            let updated = self.proposals.hr_manager_approve(proposal.id, &actor.email).await?;
            self.notify_interviewer_of_approval(&candidate, &updated, actor).await;
            self.notify_submitter(
                &updated,
                events::OFFER_APPROVED,
                "Offer approved by HR Manager",
                &format!("The offer for {} was approved", candidate.full_name),
                Some(candidate.id),
            )
            .await;
            Ok(updated)
        } else {
            let notes = payload.rejection_notes().ok_or_else(|| {
                Error::BadRequest("Rejection notes are required".to_string())
            })?;
            let updated = self.proposals.hr_manager_reject(proposal.id, notes).await?;
            // Status stays pending_approval; the audit trail records the
            // rejection as a same-state entry.
            self.history
                .append(
                    candidate.id,
                    CandidateStatus::PendingApproval,
                    CandidateStatus::PendingApproval,
                    actor.user_id,
                    &actor.email,
                    Some(&format!("HR Manager rejected offer: {}", notes)),
                )
                .await?;
            self.notify_submitter(
                &updated,
                events::OFFER_REJECTED,
                "Offer rejected by HR Manager",
                &format!("The offer for {} was rejected: {}", candidate.full_name, notes),
                Some(candidate.id),
            )
            .await;
            if let Some(ref submitter_email) = updated.created_by_email {
                let data = json!({
                    "candidate_name": candidate.full_name,
                    "position": updated.position_title,
                    "rejected_by": actor.email,
                    "rejection_notes": notes,
                });
                self.dispatch_email(
                    events::OFFER_REJECTED,
                    candidate.id,
                    submitter_email,
                    None,
                    data,
                    actor,
                )
                .await;
            }
            Ok(updated)
        }
    }

    pub async fn interviewer_decision(
        &self,
        proposal_id: Uuid,
        payload: &DecisionPayload,
        actor: &AuthContext,
    ) -> Result<JobProposal> {
        let proposal = self
            .proposals
            .get(proposal_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job proposal not found".to_string()))?;
        let candidate = self.require_candidate(proposal.candidate_id).await?;

        if actor.role != ROLE_HR_ADMIN {
            let assignment = self
                .assignments
                .active_for_candidate(candidate.id)
                .await?
                .ok_or_else(|| {
                    Error::Conflict("Candidate has no active interviewer assignment".to_string())
                })?;
            if !assignment.interviewer_email.eq_ignore_ascii_case(&actor.email) {
                return Err(Error::Forbidden(
                    "Only the assigned interviewer can acknowledge this offer".to_string(),
                ));
            }
        }
        if !proposal.hr_manager_approved {
            return Err(Error::Conflict(
                "Offer has not been approved by the HR Manager yet".to_string(),
            ));
        }

        if payload.approve {
            let updated = self
                .proposals
                .interviewer_acknowledge(proposal.id, &actor.email)
                .await?;
            self.transition(
                &candidate,
                CandidateStatus::OfferSent,
                actor,
                Some("Offer acknowledged by interviewer"),
            )
            .await?;
            self.notify_submitter(
                &updated,
                events::OFFER_ACKNOWLEDGED,
                "Offer acknowledged",
                &format!("The offer for {} was sent to the candidate", candidate.full_name),
                Some(candidate.id),
            )
            .await;
            if let Some(ref manager_email) = updated.hr_manager_approved_by {
                if let Ok(Some(manager)) = self.permissions.find_by_email(manager_email).await {
                    self.notifications
                        .notify_best_effort(
                            manager.user_id,
                            events::OFFER_ACKNOWLEDGED,
                            "Offer acknowledged",
                            &format!(
                                "The offer for {} was acknowledged by the interviewer",
                                candidate.full_name
                            ),
                            Some(candidate.id),
                            Some(updated.id),
                        )
                        .await;
                }
            }
            if let Some(ref submitter_email) = updated.created_by_email {
                let data = json!({
                    "candidate_name": candidate.full_name,
                    "position": updated.position_title,
                    "acknowledged_by": actor.email,
                });
                self.dispatch_email(
                    events::OFFER_ACKNOWLEDGED,
                    candidate.id,
                    submitter_email,
                    None,
                    data,
                    actor,
                )
                .await;
            }
            Ok(updated)
        } else {
            let notes = payload.rejection_notes().ok_or_else(|| {
                Error::BadRequest("Rejection notes are required".to_string())
            })?;
            let updated = self.proposals.interviewer_reject(proposal.id, notes).await?;
            self.history
                .append(
                    candidate.id,
                    CandidateStatus::PendingApproval,
                    CandidateStatus::PendingApproval,
                    actor.user_id,
                    &actor.email,
                    Some(&format!("Interviewer declined offer: {}", notes)),
                )
                .await?;
            self.notify_submitter(
                &updated,
                events::OFFER_DECLINED,
                "Offer declined by interviewer",
                &format!(
                    "The offer for {} was declined and needs HR Manager re-approval: {}",
                    candidate.full_name, notes
                ),
                Some(candidate.id),
            )
            .await;
            if let Some(ref submitter_email) = updated.created_by_email {
                let data = json!({
                    "candidate_name": candidate.full_name,
                    "position": updated.position_title,
                    "declined_by": actor.email,
                    "rejection_notes": notes,
                });
                self.dispatch_email(
                    events::OFFER_DECLINED,
                    candidate.id,
                    submitter_email,
                    None,
                    data,
                    actor,
                )
                .await;
            }
            Ok(updated)
        }
    }

    pub async fn resubmit_offer(
        &self,
        proposal_id: Uuid,
        payload: &ResubmitOfferPayload,
        actor: &AuthContext,
    ) -> Result<JobProposal> {
        let proposal = self
            .proposals
            .get(proposal_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job proposal not found".to_string()))?;
        let candidate = self.require_candidate(proposal.candidate_id).await?;

        let updated = self.proposals.resubmit(proposal.id, payload).await?;

        match self.permissions.find_one_by_role(ROLE_HR_MANAGER).await {
            Ok(Some(manager)) => {
                self.notifications
                    .notify_best_effort(
                        manager.user_id,
                        events::OFFER_RESUBMITTED,
                        "Offer resubmitted for approval",
                        &format!(
                            "{} ({}) was edited and awaits approval again",
                            candidate.full_name, updated.position_title
                        ),
                        Some(candidate.id),
                        Some(updated.id),
                    )
                    .await;
                let data = json!({
                    "candidate_name": candidate.full_name,
                    "position": updated.position_title,
                    "resubmitted_by": actor.email,
                });
                self.dispatch_email(
                    events::OFFER_RESUBMITTED,
                    candidate.id,
                    &manager.email,
                    Some(&manager.full_name),
                    data,
                    actor,
                )
                .await;
            }
            Ok(None) => tracing::warn!(
                "no active HR Manager found to notify about resubmitted proposal {}",
                updated.id
            ),
            Err(err) => tracing::warn!(error = ?err, "HR Manager lookup failed"),
        }

        Ok(updated)
    }

    async fn notify_interviewer_of_approval(
        &self,
        candidate: &Candidate,
        proposal: &JobProposal,
        actor: &AuthContext,
    ) {
        let Ok(Some(assignment)) = self.assignments.active_for_candidate(candidate.id).await else {
            tracing::warn!(
                "no active assignment for candidate {}, skipping interviewer notification",
                candidate.id
            );
            return;
        };
        if let Ok(Some(user)) = self
            .permissions
            .find_by_email(&assignment.interviewer_email)
            .await
        {
            self.notifications
                .notify_best_effort(
                    user.user_id,
                    events::OFFER_APPROVED,
                    "Offer awaiting your acknowledgment",
                    &format!(
                        "The offer for {} was approved by the HR Manager",
                        candidate.full_name
                    ),
                    Some(candidate.id),
                    Some(proposal.id),
                )
                .await;
        }
        let data = json!({
            "candidate_name": candidate.full_name,
            "position": proposal.position_title,
            "approved_by": actor.email,
        });
        self.dispatch_email(
            events::OFFER_APPROVED,
            candidate.id,
            &assignment.interviewer_email,
            Some(&assignment.interviewer_name),
            data,
            actor,
        )
        .await;
    }

    async fn notify_submitter(
        &self,
        proposal: &JobProposal,
        notification_type: &str,
        title: &str,
        message: &str,
        candidate_id: Option<Uuid>,
    ) {
        if let Some(submitter) = proposal.created_by {
            self.notifications
                .notify_best_effort(
                    submitter,
                    notification_type,
                    title,
                    message,
                    candidate_id,
                    Some(proposal.id),
                )
                .await;
        }
    }

    /// Fire-and-forget email fan-out: a relay failure is logged and the
    /// workflow action it decorates stays committed.
    async fn dispatch_email(
        &self,
        event_type: &str,
        candidate_id: Uuid,
        recipient_email: &str,
        recipient_name: Option<&str>,
        data: JsonValue,
        actor: &AuthContext,
    ) {
        let request = SendEmailRequest {
            event_type: Some(event_type.to_string()),
            candidate_id: Some(candidate_id),
            recipient_email: Some(recipient_email.to_string()),
            recipient_name: recipient_name.map(|n| n.to_string()),
            data: Some(data),
        };
        match self.email_relay.send(request, Some(actor.email.clone())).await {
            Ok(receipt) if receipt.success => {}
            Ok(receipt) => {
                tracing::warn!(event_type, message = ?receipt.message, "email event not delivered")
            }
            Err(err) => tracing::warn!(event_type, error = ?err, "email dispatch failed"),
        }
    }
}

/// Payload for the `interview_scheduled` event; `calendar_invite` is shaped
/// for downstream calendar-invite generation by the automation service.
fn interview_event_data(candidate: &Candidate, interview: &Interview) -> JsonValue {
    let duration = if interview.duration_minutes > 0 {
        interview.duration_minutes
    } else {
        DEFAULT_DURATION_MINUTES
    };
    let start = interview_start(interview.interview_date, interview.start_time);
    let end = start + Duration::minutes(duration as i64);
    json!({
        "candidate_name": candidate.full_name,
        "position": candidate.position_applied,
        "interviewer_name": interview.interviewer_name,
        "location": interview.location,
        "meeting_link": interview.meeting_link,
        "calendar_invite": {
            "start": to_rfc3339(start),
            "end": to_rfc3339(end),
            "attendees": [interview.interviewer_email, candidate.email],
            "online_meeting": interview.is_online,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn candidate() -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: None,
            national_id: None,
            position_applied: "Backend Engineer".into(),
            years_experience: Some(4),
            education: None,
            resume_url: None,
            tracking_token: "tok".into(),
            status: "interview_scheduled".into(),
            updated_by: None,
            updated_by_email: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn interview(candidate_id: Uuid) -> Interview {
        Interview {
            id: Uuid::new_v4(),
            candidate_id,
            assignment_id: Uuid::new_v4(),
            interviewer_name: "Ivan Petrov".into(),
            interviewer_email: "ivan@example.com".into(),
            interview_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            duration_minutes: 45,
            location: Some("Room 4".into()),
            meeting_link: Some("https://meet.example.com/x".into()),
            is_online: true,
            status: "scheduled".into(),
            feedback_submitted: false,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn calendar_invite_spans_the_interview_slot() {
        let candidate = candidate();
        let data = interview_event_data(&candidate, &interview(candidate.id));
        let invite = &data["calendar_invite"];
        assert_eq!(invite["start"], "2026-03-14T10:00:00+00:00");
        assert_eq!(invite["end"], "2026-03-14T10:45:00+00:00");
        assert_eq!(invite["online_meeting"], true);
        let attendees = invite["attendees"].as_array().unwrap();
        assert_eq!(attendees.len(), 2);
        assert_eq!(attendees[0], "ivan@example.com");
        assert_eq!(attendees[1], "jane@example.com");
    }

    #[test]
    fn event_data_carries_candidate_and_interviewer() {
        let candidate = candidate();
        let data = interview_event_data(&candidate, &interview(candidate.id));
        assert_eq!(data["candidate_name"], "Jane Doe");
        assert_eq!(data["position"], "Backend Engineer");
        assert_eq!(data["interviewer_name"], "Ivan Petrov");
        assert_eq!(data["meeting_link"], "https://meet.example.com/x");
    }

    #[test]
    fn zero_duration_falls_back_to_default() {
        let candidate = candidate();
        let mut iv = interview(candidate.id);
        iv.duration_minutes = 0;
        let data = interview_event_data(&candidate, &iv);
        assert_eq!(data["calendar_invite"]["end"], "2026-03-14T11:00:00+00:00");
    }
}
