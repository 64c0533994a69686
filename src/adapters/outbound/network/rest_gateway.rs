use crate::ports::outbound::{
    ApprovalGateway, ApprovalStepRequest, Credentials, QuotationLinesPage,
};
use crate::quotation::domain::{QuotationLine, StepRecord};
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// PortalApiClient adapter for the procurement approval backend
///
/// This adapter implements the ApprovalGateway port over the portal's
/// JSON API. Every endpoint is a POST with the credential pair embedded
/// in the request body; there is no session or token handshake.
///
/// # Async Support
/// Uses the async reqwest client so the dispatcher can keep many
/// approval-step submissions in flight at once.
pub struct PortalApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PortalApiClient {
    const QUOTATION_LINES_PATH: &'static str = "/api/quotationlines";
    const APPROVAL_STEP_PATH: &'static str = "/api/approvalstep";
    const MY_STEPS_PATH: &'static str = "/api/mysteps";

    /// Creates a new portal client for the given base URL
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("rfq-approve/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let response = self.client.post(self.url(path)).json(body).send().await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Portal API returned status code {} for {}",
                response.status(),
                path
            );
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ApprovalGateway for PortalApiClient {
    async fn fetch_quotation_lines(
        &self,
        credentials: &Credentials,
        inquiry_no: u32,
        revision_no: u32,
    ) -> Result<QuotationLinesPage> {
        let body = QuotationLinesBody {
            username: &credentials.username,
            password: &credentials.password,
            inquiry_no,
            revision_no,
        };
        let response: QuotationLinesResponse =
            self.post(Self::QUOTATION_LINES_PATH, &body).await?;

        if !response.success {
            anyhow::bail!(
                "{}",
                response
                    .error_message
                    .unwrap_or_else(|| "Portal reported failure without a message".to_string())
            );
        }
        let lines = response
            .quotation_lines
            .ok_or_else(|| anyhow::anyhow!("Portal response is missing the quotation lines"))?;

        let total_count = response.total_count.unwrap_or(lines.len() as u32);
        Ok(QuotationLinesPage {
            // Older portal builds omit the echo; assume the requested
            // inquiry in that case.
            inquiry_no: response.inquiry_no.unwrap_or(inquiry_no),
            total_count,
            lines,
        })
    }

    async fn submit_approval_step(
        &self,
        credentials: &Credentials,
        request: &ApprovalStepRequest,
    ) -> Result<()> {
        let body = ApprovalStepBody {
            username: &credentials.username,
            password: &credentials.password,
            lu_name: &request.lu_name,
            inquiry_no: request.inquiry_no,
            quot_line_no: request.quot_line_no,
            revision_no: request.revision_no,
            vendor_no: &request.vendor_no,
            status: request.status.code(),
            note: &request.note,
        };
        let response: ApiAck = self.post(Self::APPROVAL_STEP_PATH, &body).await?;

        if !response.success {
            anyhow::bail!(
                "{}",
                response
                    .error_message
                    .unwrap_or_else(|| "Portal rejected the approval step".to_string())
            );
        }
        Ok(())
    }

    async fn fetch_my_steps(&self, credentials: &Credentials) -> Result<Vec<StepRecord>> {
        let body = MyStepsBody {
            username: &credentials.username,
            password: &credentials.password,
        };
        let response: MyStepsResponse = self.post(Self::MY_STEPS_PATH, &body).await?;

        if !response.success {
            anyhow::bail!(
                "{}",
                response
                    .error_message
                    .unwrap_or_else(|| "Portal reported failure without a message".to_string())
            );
        }
        Ok(response.steps.unwrap_or_default())
    }
}

// Portal API request/response structures

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuotationLinesBody<'a> {
    username: &'a str,
    password: &'a str,
    inquiry_no: u32,
    revision_no: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuotationLinesResponse {
    success: bool,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    quotation_lines: Option<Vec<QuotationLine>>,
    #[serde(default)]
    total_count: Option<u32>,
    #[serde(default)]
    inquiry_no: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApprovalStepBody<'a> {
    username: &'a str,
    password: &'a str,
    lu_name: &'a str,
    inquiry_no: u32,
    quot_line_no: u32,
    revision_no: u32,
    vendor_no: &'a str,
    status: &'a str,
    note: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiAck {
    success: bool,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MyStepsBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyStepsResponse {
    success: bool,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    steps: Option<Vec<StepRecord>>,
}
