//! External resource links.

use axum::Json;
use serde::Serialize;

pub const NPM_PACKAGE_URL: &str = "https://www.npmjs.com/settings/zhanghongping/packages";
pub const GITHUB_REPO_URL: &str = "https://github.com/hongping1963-source/json-sage-workflow";

#[derive(Debug, Serialize)]
pub struct Links {
    pub npm_package: &'static str,
    pub github_repo: &'static str,
}

pub async fn get_links() -> Json<Links> {
    Json(Links {
        npm_package: NPM_PACKAGE_URL,
        github_repo: GITHUB_REPO_URL,
    })
}
