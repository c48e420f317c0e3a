//! Fixed pool of parsed candidate profiles handed out to uploads.
//!
//! Profiles are assigned in round-robin order off a process-wide cursor:
//! two uploads to different jobs still advance the same cursor, so
//! assignment order is global upload order, not per-job order.

use super::models::{FitLevel, ParsedCvData, PipelineStep};

pub const POOL_SIZE: usize = 5;

/// Returns the profile for the given cursor position (`cursor % POOL_SIZE`).
pub fn profile_at(cursor: usize) -> ParsedCvData {
    match cursor % POOL_SIZE {
        0 => ParsedCvData {
            name: "Priya Sharma".to_string(),
            role: "Senior Backend Engineer".to_string(),
            company: "CloudScale Systems".to_string(),
            experience_years: 7,
            skills: skills(&["Python", "Django", "PostgreSQL", "AWS", "Kubernetes"]),
            education: "B.Tech Computer Science, IIT Delhi".to_string(),
            match_score: Some(88),
            strengths: skills(&["Deep backend experience", "Strong cloud architecture background"]),
            weaknesses: skills(&["No frontend exposure"]),
            matched_skills: skills(&["Python", "PostgreSQL", "AWS"]),
            missing_skills: skills(&["GraphQL"]),
            fit_level: Some(FitLevel::Strong),
            pipeline_step: Some(PipelineStep::Screening),
            interview_questions: skills(&[
                "Walk through a service you scaled past 10k requests per second.",
                "How do you approach zero-downtime schema migrations?",
            ]),
        },
        1 => ParsedCvData {
            name: "Marcus Webb".to_string(),
            role: "Frontend Developer".to_string(),
            company: "Brightline Media".to_string(),
            experience_years: 4,
            skills: skills(&["React", "TypeScript", "CSS", "Next.js", "Testing"]),
            education: "B.Sc. Software Engineering, University of Leeds".to_string(),
            match_score: Some(74),
            strengths: skills(&["Polished UI work", "Accessibility-first habits"]),
            weaknesses: skills(&["Limited backend experience", "No design-system ownership yet"]),
            matched_skills: skills(&["React", "TypeScript", "CSS"]),
            missing_skills: skills(&["GraphQL", "Next.js at scale"]),
            fit_level: Some(FitLevel::Medium),
            pipeline_step: Some(PipelineStep::New),
            interview_questions: skills(&[
                "How do you keep a component library consistent across teams?",
            ]),
        },
        2 => ParsedCvData {
            name: "Elena Rodriguez".to_string(),
            role: "Data Scientist".to_string(),
            company: "Meridian Analytics".to_string(),
            experience_years: 6,
            skills: skills(&["Python", "Machine Learning", "SQL", "TensorFlow", "Spark"]),
            education: "M.Sc. Statistics, Universidad de Barcelona".to_string(),
            match_score: Some(91),
            strengths: skills(&["Production ML pipelines", "Strong experimentation discipline"]),
            weaknesses: skills(&["Light on deep learning research"]),
            matched_skills: skills(&["Python", "Machine Learning", "SQL", "TensorFlow"]),
            missing_skills: skills(&["PyTorch"]),
            fit_level: Some(FitLevel::Strong),
            pipeline_step: Some(PipelineStep::Interviewing),
            interview_questions: skills(&[
                "Describe a model you retired and why.",
                "How do you detect training/serving skew?",
            ]),
        },
        3 => ParsedCvData {
            name: "James Okafor".to_string(),
            role: "DevOps Engineer".to_string(),
            company: "Northgate Hosting".to_string(),
            experience_years: 5,
            skills: skills(&["AWS", "Kubernetes", "Terraform", "CI/CD", "Prometheus"]),
            education: "B.Sc. Computer Science, University of Lagos".to_string(),
            match_score: Some(82),
            strengths: skills(&["Infrastructure-as-code everywhere", "Incident response lead"]),
            weaknesses: skills(&["No GCP exposure"]),
            matched_skills: skills(&["AWS", "Kubernetes", "Terraform", "CI/CD"]),
            missing_skills: skills(&["Ansible"]),
            fit_level: Some(FitLevel::Strong),
            pipeline_step: Some(PipelineStep::Screening),
            interview_questions: skills(&[
                "How do you roll back a bad infrastructure change safely?",
            ]),
        },
        _ => ParsedCvData {
            name: "Sofia Lindqvist".to_string(),
            role: "Product Manager".to_string(),
            company: "Fjord Digital".to_string(),
            experience_years: 8,
            skills: skills(&["Product Strategy", "Agile", "Analytics", "User Research", "SQL"]),
            education: "M.Sc. Industrial Engineering, KTH Stockholm".to_string(),
            match_score: Some(68),
            strengths: skills(&["Strong discovery process", "Data-informed roadmaps"]),
            weaknesses: skills(&["No marketplace experience", "Short tenure in last role"]),
            matched_skills: skills(&["Product Strategy", "Agile", "Analytics"]),
            missing_skills: skills(&["Figma"]),
            fit_level: Some(FitLevel::Medium),
            pipeline_step: Some(PipelineStep::New),
            interview_questions: skills(&[
                "Tell me about a feature you killed before launch.",
            ]),
        },
    }
}

/// File name fabricated for an upload from its assigned profile; the real
/// upload's name is discarded.
pub fn file_name_for(profile: &ParsedCvData) -> String {
    format!(
        "{}_resume.pdf",
        profile.name.to_lowercase().replace(' ', "_")
    )
}

fn skills(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
