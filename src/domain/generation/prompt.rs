//! Prompt assembly for the generation engine.
//!
//! The deploy prompt literally embeds the three section headings the
//! segmenter scans for; see the `headings` module.

use crate::domain::session::{CicdPlatform, DeploySession};

use super::headings::{heading_line, DOCKERFILE_LABEL, MANIFEST_LABEL, PIPELINE_LABEL};

/// Persona preamble for free-form DevOps questions.
pub const ADVISOR_PREAMBLE: &str = "You are a senior DevOps engineer assisting developers with \
     DevOps, cloud, and software engineering questions. Provide concise, accurate answers using \
     best practices.";

/// Builds the one-shot generation request from a completed session.
///
/// Parameters not collected yet fall back to neutral wording; the dialogue
/// only calls this once the session has reached the confirmation stage.
pub fn build_deploy_prompt(session: &DeploySession) -> String {
    let framework = session.framework().unwrap_or("the application");
    let ingress_directive = if session.https_ingress().unwrap_or(false) {
        "HTTPS Ingress"
    } else {
        "internal service only"
    };
    let cicd_directive = session
        .cicd()
        .unwrap_or(CicdPlatform::None)
        .generation_directive();

    format!(
        "You are a senior DevOps engineer. \
         Generate three distinct files for a {framework} application:\n\n\
         {dockerfile}\n\
         Production-ready Dockerfile including multi-stage build, proper user, ports, and comments.\n\n\
         {manifest}\n\
         Best-practice deployment, service, and {ingress_directive} configuration.\n\n\
         {pipeline}\n\
         {cicd_directive}\n\n\
         Label each section clearly as above.",
        framework = framework,
        dockerfile = heading_line(DOCKERFILE_LABEL),
        manifest = heading_line(MANIFEST_LABEL),
        pipeline = heading_line(PIPELINE_LABEL),
        ingress_directive = ingress_directive,
        cicd_directive = cicd_directive,
    )
}

/// Builds a standalone pipeline generation request from a free-text ask.
pub fn build_pipeline_prompt(platform: CicdPlatform, request: &str) -> String {
    let description = match platform {
        CicdPlatform::Jenkins => "a Jenkins pipeline script",
        CicdPlatform::Gitlab => "a GitLab CI YAML pipeline configuration",
        _ => "a GitHub Actions workflow YAML file",
    };
    [
        "You are a senior DevOps engineer.".to_string(),
        format!("Generate {} based on the user's request below.", description),
        "Include best practices, caching, testing, building, and deployment steps.".to_string(),
        "Add comments to explain each stage and step.".to_string(),
        format!("User's request: {}", request.trim()),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn completed_session() -> DeploySession {
        let mut s = DeploySession::new(UserId::new("tester").unwrap());
        s.begin().unwrap();
        s.record_framework("FastAPI").unwrap();
        s.record_ingress("https").unwrap();
        s.record_cicd(CicdPlatform::Gitlab).unwrap();
        s
    }

    #[test]
    fn deploy_prompt_embeds_all_three_headings_verbatim() {
        let prompt = build_deploy_prompt(&completed_session());
        assert!(prompt.contains("### Dockerfile\n"));
        assert!(prompt.contains("### Kubernetes manifest\n"));
        assert!(prompt.contains("### CI/CD pipeline\n"));
    }

    #[test]
    fn deploy_prompt_interpolates_framework() {
        let prompt = build_deploy_prompt(&completed_session());
        assert!(prompt.contains("for a FastAPI application"));
    }

    #[test]
    fn deploy_prompt_reflects_https_choice() {
        let prompt = build_deploy_prompt(&completed_session());
        assert!(prompt.contains("HTTPS Ingress configuration"));
    }

    #[test]
    fn deploy_prompt_for_internal_service() {
        let mut s = DeploySession::new(UserId::new("tester").unwrap());
        s.begin().unwrap();
        s.record_framework("Flask").unwrap();
        s.record_ingress("internal only").unwrap();
        s.record_cicd(CicdPlatform::None).unwrap();
        let prompt = build_deploy_prompt(&s);
        assert!(prompt.contains("internal service only configuration"));
        assert!(prompt.contains("intentionally empty"));
    }

    #[test]
    fn pipeline_prompt_names_the_platform_flavor() {
        let prompt = build_pipeline_prompt(CicdPlatform::Jenkins, "deploy my flask app");
        assert!(prompt.contains("Jenkins pipeline script"));
        assert!(prompt.contains("User's request: deploy my flask app"));
    }

    #[test]
    fn pipeline_prompt_defaults_to_github_actions() {
        let prompt = build_pipeline_prompt(CicdPlatform::GithubActions, "build and test");
        assert!(prompt.contains("GitHub Actions workflow"));
    }
}
