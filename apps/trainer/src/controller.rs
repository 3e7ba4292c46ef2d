//! Session controller: the stateful side of the trainer.
//!
//! Owns the catalog, the session history and at most one active practice
//! session. Every operation returns a [`PracticeState`] snapshot so the
//! presentation layer can render without holding any state of its own.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use vocab_core::{
    build_exam_list, build_range_list, chapter_label, AnswerOutcome, ChapterMatches,
    ChapterSummary, ExamPlan, Feedback, IndexedWord, PracticeResults, PracticeSession,
    SessionDetail, SessionError, SessionPhase, SessionRecord, SessionSource, VocabularyCatalog,
};

use crate::config::TrainerConfig;
use crate::db::date_utils::today_short_date;
use crate::db::{load_history, save_history, SnapshotStore};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("no active session")]
    NoActiveSession,

    #[error("session not found: {0}")]
    SessionNotFound(usize),

    #[error(transparent)]
    Session(#[from] SessionError),
}

type Result<T> = std::result::Result<T, ControllerError>;

/// Phase as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    Idle,
    ListBuilt,
    InProgress,
    AwaitingContinue,
    Completed,
}

impl From<SessionPhase> for ViewPhase {
    fn from(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::ListBuilt => Self::ListBuilt,
            SessionPhase::InProgress => Self::InProgress,
            SessionPhase::AwaitingContinue => Self::AwaitingContinue,
            SessionPhase::Completed => Self::Completed,
        }
    }
}

/// Observable state after an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeState {
    pub phase: ViewPhase,
    pub chapter: Option<String>,
    pub chapter_label: Option<String>,
    pub current_index: usize,
    /// One-based position shown as "Question N of M".
    pub question_number: usize,
    pub total: usize,
    pub score: u32,
    /// Definition the learner must translate back into the word.
    pub prompt: Option<String>,
    pub feedback: Option<Feedback>,
    pub results: Option<PracticeResults>,
}

impl PracticeState {
    fn idle() -> Self {
        Self {
            phase: ViewPhase::Idle,
            chapter: None,
            chapter_label: None,
            current_index: 0,
            question_number: 0,
            total: 0,
            score: 0,
            prompt: None,
            feedback: None,
            results: None,
        }
    }

    fn active(session: &PracticeSession) -> Self {
        let chapter = session.source().chapter_key().to_string();
        Self {
            phase: session.phase().into(),
            chapter_label: Some(chapter_label(&chapter)),
            chapter: Some(chapter),
            current_index: session.current_index(),
            question_number: (session.current_index() + 1).min(session.total()),
            total: session.total(),
            score: session.score(),
            prompt: session.current_item().map(|item| item.definition.clone()),
            feedback: session.feedback().cloned(),
            results: None,
        }
    }

    fn completed(record: &SessionRecord) -> Self {
        Self {
            phase: ViewPhase::Completed,
            chapter: Some(record.chapter.clone()),
            chapter_label: Some(chapter_label(&record.chapter)),
            current_index: record.total,
            question_number: record.total,
            total: record.total,
            score: record.score,
            prompt: None,
            feedback: None,
            results: Some(PracticeResults::from_record(record)),
        }
    }
}

/// Response to a submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerResponse {
    pub outcome: AnswerOutcome,
    pub advanced: bool,
    pub state: PracticeState,
}

pub struct SessionController<S: SnapshotStore> {
    catalog: VocabularyCatalog,
    store: S,
    config: TrainerConfig,
    history: Vec<SessionRecord>,
    session: Option<PracticeSession>,
    finished: Option<SessionRecord>,
    last_exam_plan: Option<ExamPlan>,
    rng: StdRng,
}

impl<S: SnapshotStore> SessionController<S> {
    /// Create a controller, loading history from `store`.
    pub fn new(catalog: VocabularyCatalog, store: S, config: TrainerConfig) -> Self {
        let history = load_history(&store);
        info!(
            chapters = catalog.chapters().len(),
            sessions = history.len(),
            "session controller ready"
        );
        Self {
            catalog,
            store,
            config,
            history,
            session: None,
            finished: None,
            last_exam_plan: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a seeded RNG so practice lists are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn catalog(&self) -> &VocabularyCatalog {
        &self.catalog
    }

    pub fn list_chapters(&self) -> Vec<ChapterSummary> {
        self.catalog.list_chapters()
    }

    pub fn search_library(&self, term: &str) -> Vec<ChapterMatches> {
        self.catalog.search(term)
    }

    /// Words of a chapter matching `term`, for the range picker.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownChapter` for a missing chapter.
    pub fn chapter_words(&self, chapter: &str, term: &str) -> Result<Vec<IndexedWord>> {
        self.catalog
            .chapter_words(chapter, term)
            .ok_or_else(|| SessionError::UnknownChapter(chapter.to_string()).into())
    }

    /// Start a session over `[start, end)` of `chapter`.
    ///
    /// Replaces any session in progress. On error nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `UnknownChapter` or `InvalidRange` for bad input.
    pub fn start_chapter_session(
        &mut self,
        chapter: &str,
        start: usize,
        end: usize,
    ) -> Result<PracticeState> {
        let items = build_range_list(&self.catalog, chapter, start, end, &mut self.rng)?;
        let source = SessionSource::Chapter {
            chapter: chapter.to_string(),
            start,
            end,
        };
        info!(chapter, start, end, "starting chapter session");
        self.begin(PracticeSession::new(source, items)?)
    }

    /// Start an exam session sampled across all chapters.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySession` when the catalog yields no words.
    pub fn start_exam_session(&mut self) -> Result<PracticeState> {
        let requested = self.config.exam_questions;
        let (items, plan) = build_exam_list(&self.catalog, requested, &mut self.rng);
        if plan.shortfall() > 0 {
            warn!(
                requested,
                selected = plan.total(),
                "chapters too small for exam allocation, using fewer questions"
            );
        }
        info!(questions = items.len(), "starting exam session");

        let session = PracticeSession::new(SessionSource::Exam { requested }, items)?;
        self.last_exam_plan = Some(plan);
        self.begin(session)
    }

    fn begin(&mut self, session: PracticeSession) -> Result<PracticeState> {
        if self.session.is_some() {
            debug!("replacing unfinished session");
        }
        self.finished = None;
        self.session = Some(session);
        Ok(self.current_state())
    }

    /// Allocation used by the most recent exam session.
    pub fn last_exam_plan(&self) -> Option<&ExamPlan> {
        self.last_exam_plan.as_ref()
    }

    fn active_session(&mut self) -> Result<&mut PracticeSession> {
        self.session.as_mut().ok_or(ControllerError::NoActiveSession)
    }

    /// Judge an answer to the current item.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` when idle, or the session's rejection
    /// (`AwaitingContinue`, `SessionCompleted`).
    pub fn submit_answer(&mut self, text: &str) -> Result<AnswerResponse> {
        let outcome = self.active_session()?.submit_answer(text)?;
        debug!(outcome = ?outcome.outcome, "answer submitted");
        self.finish_if_complete()?;
        Ok(AnswerResponse {
            outcome: outcome.outcome,
            advanced: outcome.advanced,
            state: self.current_state(),
        })
    }

    /// Skip the current item.
    ///
    /// # Errors
    ///
    /// Same as [`SessionController::submit_answer`].
    pub fn skip(&mut self) -> Result<PracticeState> {
        self.active_session()?.skip()?;
        self.finish_if_complete()?;
        Ok(self.current_state())
    }

    /// Acknowledge incorrect-answer feedback.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` when idle and `NothingToContinue` when no
    /// feedback is pending.
    pub fn continue_after_feedback(&mut self) -> Result<PracticeState> {
        self.active_session()?.continue_after_feedback()?;
        self.finish_if_complete()?;
        Ok(self.current_state())
    }

    /// Drop the active session (or finished results) without recording it.
    pub fn abandon_session(&mut self) -> PracticeState {
        if let Some(session) = self.session.take() {
            info!(
                answered = session.answers().len(),
                total = session.total(),
                "session abandoned"
            );
        }
        self.finished = None;
        self.current_state()
    }

    fn finish_if_complete(&mut self) -> Result<()> {
        let Some(session) = self.session.as_ref().filter(|s| s.is_complete()) else {
            return Ok(());
        };

        let record = session.finalize(today_short_date())?;
        info!(
            chapter = %record.chapter,
            score = record.score,
            total = record.total,
            "session completed"
        );

        self.session = None;
        self.history.insert(0, record.clone());
        self.finished = Some(record);
        self.persist_history();
        Ok(())
    }

    fn persist_history(&self) {
        if let Err(e) = save_history(&self.store, &self.history) {
            warn!(error = %e, "failed to save session history");
        }
    }

    pub fn current_state(&self) -> PracticeState {
        match (&self.session, &self.finished) {
            (Some(session), _) => PracticeState::active(session),
            (None, Some(record)) => PracticeState::completed(record),
            (None, None) => PracticeState::idle(),
        }
    }

    /// All finished sessions, most recent first.
    pub fn history(&self) -> &[SessionRecord] {
        &self.history
    }

    /// The most recent sessions, up to the configured limit.
    pub fn recent_sessions(&self) -> &[SessionRecord] {
        let limit = self.config.recent_limit.min(self.history.len());
        &self.history[..limit]
    }

    /// Detail view of the session at `index` in history order.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::SessionNotFound` for an out-of-range index.
    pub fn session_detail(&self, index: usize) -> Result<SessionDetail> {
        let record = self
            .history
            .get(index)
            .ok_or(ControllerError::SessionNotFound(index))?;
        Ok(SessionDetail::build(record, &self.catalog))
    }
}
