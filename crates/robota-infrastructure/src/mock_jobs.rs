//! Seeded job catalog for demos and development.
//!
//! Serves a fixed set of vacancies with simulated network latency. Replace
//! with a real API client (Adzuna etc.) in production builds.

use async_trait::async_trait;
use robota_core::error::Result;
use robota_core::job::{Job, JobCatalog, JobSearchParams, JobType};
use std::time::Duration;

const SEARCH_LATENCY: Duration = Duration::from_millis(400);
const LOOKUP_LATENCY: Duration = Duration::from_millis(200);

/// In-memory [`JobCatalog`] implementation.
pub struct MockJobCatalog {
    jobs: Vec<Job>,
    search_latency: Duration,
    lookup_latency: Duration,
}

impl Default for MockJobCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockJobCatalog {
    /// Creates the catalog with the demo vacancies and realistic latency.
    pub fn new() -> Self {
        Self {
            jobs: seed_jobs(),
            search_latency: SEARCH_LATENCY,
            lookup_latency: LOOKUP_LATENCY,
        }
    }

    /// Creates the catalog with no artificial latency, for tests.
    pub fn instant() -> Self {
        Self {
            jobs: seed_jobs(),
            search_latency: Duration::ZERO,
            lookup_latency: Duration::ZERO,
        }
    }

    /// Replaces the seeded vacancies.
    pub fn with_jobs(mut self, jobs: Vec<Job>) -> Self {
        self.jobs = jobs;
        self
    }
}

#[async_trait]
impl JobCatalog for MockJobCatalog {
    async fn search_jobs(&self, params: &JobSearchParams) -> Result<Vec<Job>> {
        tokio::time::sleep(self.search_latency).await;

        let mut results: Vec<Job> = self.jobs.clone();

        if let Some(query) = params.query.as_deref() {
            let query = normalize(query);
            if !query.is_empty() {
                results.retain(|job| {
                    normalize(&job.title).contains(&query)
                        || normalize(&job.company).contains(&query)
                        || normalize(&job.description).contains(&query)
                });
            }
        }

        if let Some(location) = params.location.as_deref() {
            let location = normalize(location);
            if !location.is_empty() {
                results.retain(|job| normalize(&job.location).contains(&location));
            }
        }

        if let Some(job_type) = params.job_type {
            results.retain(|job| job.job_type == job_type);
        }

        Ok(results)
    }

    async fn job_by_id(&self, id: &str) -> Result<Option<Job>> {
        tokio::time::sleep(self.lookup_latency).await;
        Ok(self.jobs.iter().find(|job| job.id == id).cloned())
    }
}

/// Lowercases, trims and collapses runs of whitespace.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn seed_jobs() -> Vec<Job> {
    vec![
        job(
            "1",
            "Frontend React Developer",
            "TechFlow Ukraine",
            "Київ, Україна",
            Some("₴60 000 – ₴90 000"),
            JobType::FullTime,
            "2 дні тому",
            "Шукаємо досвідченого Frontend-розробника для роботи над продуктами для європейських клієнтів. Стек: React, TypeScript, Next.js.",
            &["3+ роки досвіду з React", "TypeScript", "REST API", "Git"],
        ),
        job(
            "2",
            "Node.js Backend Engineer",
            "DataSoft",
            "Львів (віддалено)",
            Some("₴70 000 – ₴100 000"),
            JobType::Remote,
            "1 день тому",
            "Розробка та підтримка backend-систем на Node.js. Робота з PostgreSQL, Redis, мікросервісна архітектура.",
            &["Node.js, Express/NestJS", "PostgreSQL", "Docker", "2+ роки досвіду"],
        ),
        job(
            "3",
            "UI/UX Designer",
            "Creative Studio",
            "Одеса / Гібрид",
            Some("₴45 000 – ₴65 000"),
            JobType::Hybrid,
            "3 дні тому",
            "Проєктування інтерфейсів для веб і мобільних додатків. Близька співпраця з командою розробки.",
            &["Figma", "Design systems", "Прототипування", "Портфоліо"],
        ),
        job(
            "4",
            "Python Developer",
            "AI Labs",
            "Київ",
            Some("₴80 000 – ₴120 000"),
            JobType::FullTime,
            "5 днів тому",
            "Розробка ML-пайплайнів та сервісів обробки даних. Python, FastAPI, pandas, scikit-learn.",
            &["Python 3+", "FastAPI/Django", "SQL", "Базові знання ML"],
        ),
        job(
            "5",
            "React Native Developer",
            "MobileFirst",
            "Віддалено",
            Some("₴65 000 – ₴95 000"),
            JobType::Remote,
            "Сьогодні",
            "Розробка крос-платформних мобільних додатків на React Native. Участь у повному циклі розробки.",
            &["React Native", "Expo", "TypeScript", "1+ рік досвіду"],
        ),
        job(
            "6",
            "DevOps Engineer",
            "CloudTech",
            "Харків / Віддалено",
            Some("₴90 000 – ₴130 000"),
            JobType::Hybrid,
            "1 день тому",
            "CI/CD, Kubernetes, моніторинг, інфраструктура як код. AWS або GCP.",
            &["Kubernetes", "Docker", "Terraform/Ansible", "AWS або GCP"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: Option<&str>,
    job_type: JobType,
    posted_at: &str,
    description: &str,
    requirements: &[&str],
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary: salary.map(str::to_string),
        job_type,
        posted_at: posted_at.to_string(),
        description: description.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        logo: None,
    }
}
