//! Typed broadcast bridge between the assist endpoint and listening job
//! forms. Replaces page-global event dispatch with a channel injected
//! through application state.

use tokio::sync::broadcast;

use crate::jobs::models::{EmploymentType, WorkLocation};

use super::client::JobFieldPayload;

const CHANNEL_CAPACITY: usize = 16;

/// Publish side of the form-fill broadcast. Delivery is fire-and-forget:
/// subscribers that lag or are absent simply miss the event.
#[derive(Clone)]
pub struct FormFillBus {
    tx: broadcast::Sender<JobFieldPayload>,
}

impl FormFillBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Broadcasts a payload to whatever forms are currently listening and
    /// returns how many receivers it reached.
    pub fn publish(&self, payload: JobFieldPayload) -> usize {
        self.tx.send(payload).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<JobFieldPayload> {
        self.tx.subscribe()
    }
}

impl Default for FormFillBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Local field state of a requisition form listening on the bus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFormState {
    pub title: String,
    pub department: String,
    pub location: Option<WorkLocation>,
    pub employment_type: Option<EmploymentType>,
    pub hiring_manager: String,
    pub target_years_min: Option<u32>,
    pub target_years_max: Option<u32>,
    pub required_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
    pub description: String,
}

impl JobFormState {
    /// Applies a broadcast payload as one atomic update. Fields the service
    /// omitted keep their current value.
    pub fn apply(&mut self, payload: &JobFieldPayload) {
        self.title = payload.title.clone();
        self.department = payload.department.clone();
        if let Some(location) = payload.location {
            self.location = Some(location);
        }
        if let Some(employment_type) = payload.employment_type {
            self.employment_type = Some(employment_type);
        }
        if let Some(hiring_manager) = &payload.hiring_manager {
            self.hiring_manager = hiring_manager.clone();
        }
        if payload.target_years_min.is_some() {
            self.target_years_min = payload.target_years_min;
        }
        if payload.target_years_max.is_some() {
            self.target_years_max = payload.target_years_max;
        }
        if !payload.required_skills.is_empty() {
            self.required_skills = payload.required_skills.clone();
        }
        if !payload.nice_to_have_skills.is_empty() {
            self.nice_to_have_skills = payload.nice_to_have_skills.clone();
        }
        if let Some(description) = &payload.description {
            self.description = description.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_engineer_payload() -> JobFieldPayload {
        JobFieldPayload {
            title: "Data Engineer".to_string(),
            department: "Data".to_string(),
            location: Some(WorkLocation::Remote),
            employment_type: None,
            hiring_manager: None,
            target_years_min: Some(3),
            target_years_max: Some(6),
            required_skills: vec!["Python".to_string(), "SQL".to_string()],
            nice_to_have_skills: vec![],
            salary_min: None,
            salary_max: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_broadcast_payload_reaches_a_subscribed_form() {
        let bus = FormFillBus::new();
        let mut rx = bus.subscribe();

        assert_eq!(bus.publish(data_engineer_payload()), 1);

        let received = rx.recv().await.unwrap();
        let mut form = JobFormState::default();
        form.apply(&received);

        assert_eq!(form.title, "Data Engineer");
        assert_eq!(form.department, "Data");
        assert_eq!(form.location, Some(WorkLocation::Remote));
        assert_eq!(form.target_years_min, Some(3));
        assert_eq!(form.target_years_max, Some(6));
        assert_eq!(form.required_skills, vec!["Python", "SQL"]);
        assert!(form.nice_to_have_skills.is_empty());
        assert_eq!(form.hiring_manager, "");
    }

    #[test]
    fn test_publish_without_listeners_reaches_nobody() {
        let bus = FormFillBus::new();
        assert_eq!(bus.publish(data_engineer_payload()), 0);
    }

    #[test]
    fn test_apply_keeps_fields_the_payload_omits() {
        let mut form = JobFormState {
            hiring_manager: "Sarah Johnson".to_string(),
            nice_to_have_skills: vec!["Docker".to_string()],
            ..JobFormState::default()
        };
        form.apply(&data_engineer_payload());

        assert_eq!(form.hiring_manager, "Sarah Johnson");
        assert_eq!(form.nice_to_have_skills, vec!["Docker"]);
        assert_eq!(form.title, "Data Engineer");
    }

    #[tokio::test]
    async fn test_every_subscriber_sees_the_broadcast() {
        let bus = FormFillBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        assert_eq!(bus.publish(data_engineer_payload()), 2);
        assert_eq!(first.recv().await.unwrap().title, "Data Engineer");
        assert_eq!(second.recv().await.unwrap().title, "Data Engineer");
    }
}
