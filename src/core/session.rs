use crate::core::calculator::compute;
use crate::core::presenter::{
    format_json, format_report, format_tips, NumberStyle, INVALID_INPUT, SIGN_OFF,
};
use crate::domain::model::{SaltInputs, SaltResult, DEFAULT_TARGET_SODIUM_PER_LB_MG};
use crate::domain::ports::Console;
use crate::utils::error::{Result, SaltError};

pub const WEIGHT_PROMPT: &str = "Enter weight of ribs (lbs): ";
pub const RUB_SODIUM_PROMPT: &str = "Enter sodium per 1/4 tsp of rub (mg): ";
pub const RUB_AMOUNT_PROMPT: &str = "Enter amount of rub to use (tsp): ";
pub const CUSTOM_TARGET_PROMPT: &str = "Enter target sodium per lb (mg): ";

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub default_target_mg: f64,
    pub show_tips: bool,
    pub json: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_target_mg: DEFAULT_TARGET_SODIUM_PER_LB_MG,
            show_tips: true,
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    AwaitWeight,
    AwaitRubSodium {
        weight_lbs: f64,
    },
    AwaitRubAmount {
        weight_lbs: f64,
        rub_sodium: f64,
    },
    AwaitTargetChoice {
        weight_lbs: f64,
        rub_sodium: f64,
        rub_amount_tsp: f64,
    },
    AwaitCustomTarget {
        weight_lbs: f64,
        rub_sodium: f64,
        rub_amount_tsp: f64,
    },
    Compute(SaltInputs),
    Report(SaltResult),
    Done(SaltResult),
    Aborted,
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionState::Done(_) | SessionState::Aborted | SessionState::Cancelled
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Completed(SaltResult),
    Aborted,
    Cancelled,
}

/// One pass through the custom calculator prompts.
pub struct InteractiveSession<'a, C: Console + ?Sized> {
    console: &'a mut C,
    options: SessionOptions,
}

impl<'a, C: Console + ?Sized> InteractiveSession<'a, C> {
    pub fn new(console: &'a mut C, options: SessionOptions) -> Self {
        Self { console, options }
    }

    pub async fn run(mut self) -> Result<SessionOutcome> {
        let mut state = SessionState::AwaitWeight;

        while !state.is_terminal() {
            state = match self.step(state).await {
                Ok(next) => next,
                Err(SaltError::Cancelled) => {
                    tracing::info!("Session cancelled by user");
                    self.console.write_line(&format!("\n\n{}", SIGN_OFF)).await?;
                    SessionState::Cancelled
                }
                Err(e) if e.ends_session_cleanly() => {
                    tracing::warn!("Aborting session: {}", e);
                    self.console.write_line(INVALID_INPUT).await?;
                    SessionState::Aborted
                }
                Err(e) => return Err(e),
            };
            tracing::debug!("Session state: {:?}", state);
        }

        Ok(match state {
            SessionState::Done(result) => SessionOutcome::Completed(result),
            SessionState::Cancelled => SessionOutcome::Cancelled,
            _ => SessionOutcome::Aborted,
        })
    }

    async fn step(&mut self, state: SessionState) -> Result<SessionState> {
        let next = match state {
            SessionState::AwaitWeight => {
                self.console.write_line("").await?;
                let weight_lbs = parse_float("weight", &self.console.prompt(WEIGHT_PROMPT).await?)?;
                SessionState::AwaitRubSodium { weight_lbs }
            }
            SessionState::AwaitRubSodium { weight_lbs } => {
                let line = self.console.prompt(RUB_SODIUM_PROMPT).await?;
                SessionState::AwaitRubAmount {
                    weight_lbs,
                    rub_sodium: parse_integer("rub sodium", &line)?,
                }
            }
            SessionState::AwaitRubAmount {
                weight_lbs,
                rub_sodium,
            } => {
                let line = self.console.prompt(RUB_AMOUNT_PROMPT).await?;
                SessionState::AwaitTargetChoice {
                    weight_lbs,
                    rub_sodium,
                    rub_amount_tsp: parse_float("rub amount", &line)?,
                }
            }
            SessionState::AwaitTargetChoice {
                weight_lbs,
                rub_sodium,
                rub_amount_tsp,
            } => {
                self.console.write_line("").await?;
                let choice_prompt = target_choice_prompt(self.options.default_target_mg);
                let answer = self.console.prompt(&choice_prompt).await?;
                if wants_custom_target(&answer) {
                    SessionState::AwaitCustomTarget {
                        weight_lbs,
                        rub_sodium,
                        rub_amount_tsp,
                    }
                } else {
                    SessionState::Compute(
                        SaltInputs::new(weight_lbs, rub_sodium, rub_amount_tsp)
                            .with_target(self.options.default_target_mg),
                    )
                }
            }
            SessionState::AwaitCustomTarget {
                weight_lbs,
                rub_sodium,
                rub_amount_tsp,
            } => {
                let line = self.console.prompt(CUSTOM_TARGET_PROMPT).await?;
                let target = parse_integer("target sodium", &line)?;
                SessionState::Compute(
                    SaltInputs::new(weight_lbs, rub_sodium, rub_amount_tsp).with_target(target),
                )
            }
            SessionState::Compute(inputs) => SessionState::Report(compute(&inputs)?),
            SessionState::Report(result) => {
                // prompt values are floats, so the report keeps their decimal point
                self.console
                    .write_line(&format_report(&result, NumberStyle::Float))
                    .await?;
                if self.options.json {
                    self.console.write_line(&format_json(&result)?).await?;
                }
                if self.options.show_tips {
                    self.console.write_line(&format_tips()).await?;
                }
                SessionState::Done(result)
            }
            terminal => terminal,
        };
        Ok(next)
    }
}

/// Runs the interactive calculator once over `console`.
pub async fn run_interactive<C: Console + ?Sized>(
    console: &mut C,
    options: SessionOptions,
) -> Result<SessionOutcome> {
    InteractiveSession::new(console, options).run().await
}

pub fn target_choice_prompt(default_target_mg: f64) -> String {
    format!(
        "Use default target ({}mg sodium per lb)? (y/n): ",
        default_target_mg
    )
}

/// Only a plain "n" (any case) opts into a custom target.
pub fn wants_custom_target(answer: &str) -> bool {
    answer.to_lowercase() == "n"
}

fn parse_float(field: &str, input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| SaltError::parse(field, input))
}

fn parse_integer(field: &str, input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<i64>()
        .map(|value| value as f64)
        .map_err(|_| SaltError::parse(field, input))
}
