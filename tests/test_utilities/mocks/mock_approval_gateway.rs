use async_trait::async_trait;
use rfq_approve::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ApprovalGateway with scripted failures and call recording.
///
/// Submissions fail for the scripted line numbers; successful
/// submissions are remembered and reflected on the next fetch as
/// server-side `APP`/`REJ` statuses, so the post-approval reload behaves
/// like the real backend.
#[derive(Clone)]
pub struct MockApprovalGateway {
    lines: Vec<QuotationLine>,
    steps: Vec<StepRecord>,
    failing_lines: Vec<u32>,
    fail_fetch: bool,
    submitted: Arc<Mutex<Vec<ApprovalStepRequest>>>,
    fetch_calls: Arc<Mutex<usize>>,
}

impl MockApprovalGateway {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            steps: Vec::new(),
            failing_lines: Vec::new(),
            fail_fetch: false,
            submitted: Arc::new(Mutex::new(Vec::new())),
            fetch_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_lines(mut self, lines: Vec<QuotationLine>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_steps(mut self, steps: Vec<StepRecord>) -> Self {
        self.steps = steps;
        self
    }

    pub fn failing_on(mut self, lines: &[u32]) -> Self {
        self.failing_lines = lines.to_vec();
        self
    }

    pub fn with_fetch_failure(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn submitted(&self) -> Vec<ApprovalStepRequest> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn fetch_calls(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }
}

impl Default for MockApprovalGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApprovalGateway for MockApprovalGateway {
    async fn fetch_quotation_lines(
        &self,
        _credentials: &Credentials,
        inquiry_no: u32,
        _revision_no: u32,
    ) -> Result<QuotationLinesPage> {
        *self.fetch_calls.lock().unwrap() += 1;
        if self.fail_fetch {
            anyhow::bail!("connection refused");
        }

        // Reflect accepted steps the way the backend would.
        let accepted = self.submitted.lock().unwrap().clone();
        let mut lines = self.lines.clone();
        for line in &mut lines {
            if let Some(step) = accepted.iter().find(|s| {
                s.quot_line_no == line.line_no
                    && s.vendor_no == line.vendor_no
                    && !self.failing_lines.contains(&s.quot_line_no)
            }) {
                line.approval_status = Some(step.status);
            }
        }

        Ok(QuotationLinesPage {
            total_count: lines.len() as u32,
            inquiry_no,
            lines,
        })
    }

    async fn submit_approval_step(
        &self,
        _credentials: &Credentials,
        request: &ApprovalStepRequest,
    ) -> Result<()> {
        self.submitted.lock().unwrap().push(request.clone());
        if self.failing_lines.contains(&request.quot_line_no) {
            anyhow::bail!("step rejected by server");
        }
        Ok(())
    }

    async fn fetch_my_steps(&self, _credentials: &Credentials) -> Result<Vec<StepRecord>> {
        if self.fail_fetch {
            anyhow::bail!("connection refused");
        }
        Ok(self.steps.clone())
    }
}
