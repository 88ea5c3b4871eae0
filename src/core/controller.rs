//! Session controller
//!
//! Drives a [`TranslatorSession`] from user input: edits schedule a
//! debounced call to the translation backend, language changes feed the
//! recent-languages list, and capability ports handle voice and
//! clipboard affordances.
//!
//! Overlapping backend calls are not deduplicated: if a slow call is
//! still outstanding when a later one fires, whichever resolves last
//! wins the display state.

use crate::core::capability::{ClipboardAccess, SpeechInput, SpeechOutput};
use crate::core::debounce::Debouncer;
use crate::core::recent::{RecentLanguages, RecentStore};
use crate::core::session::{SessionEvent, TranslatorSession};
use crate::core::translator::Translator;
use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;
use crate::shared::types::TranslateRequest;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Quiet period before an edit triggers a translation call.
const DEBOUNCE_QUIET: Duration = Duration::from_millis(500);

pub struct TranslatorController {
    session: Arc<Mutex<TranslatorSession>>,
    backend: Arc<dyn Translator>,
    debouncer: Debouncer,
    recent: Mutex<RecentLanguages>,
}

impl TranslatorController {
    pub fn new(backend: Arc<dyn Translator>) -> Self {
        Self::with_session(backend, TranslatorSession::default())
    }

    pub fn with_session(backend: Arc<dyn Translator>, session: TranslatorSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            backend,
            debouncer: Debouncer::new(DEBOUNCE_QUIET),
            recent: Mutex::new(RecentLanguages::new()),
        }
    }

    /// Controller seeded from the user's saved language preferences.
    pub fn from_settings(backend: Arc<dyn Translator>, settings: &AppSettings) -> Self {
        Self::with_session(
            backend,
            TranslatorSession::new(
                settings.preferences.default_source_lang.clone(),
                settings.preferences.default_target_lang.clone(),
            ),
        )
    }

    /// Reload the recent-languages list from disk.
    pub async fn restore_recent(&self) -> AppResult<()> {
        let loaded = RecentStore::load().await?;
        *self.recent.lock().unwrap_or_else(|e| e.into_inner()) = loaded;
        Ok(())
    }

    /// Persist the recent-languages list to disk.
    pub async fn persist_recent(&self) -> AppResult<()> {
        let snapshot = self.recent_languages();
        RecentStore::save(&snapshot).await
    }

    /// Snapshot of the current session state.
    pub fn session(&self) -> TranslatorSession {
        self.lock_session().clone()
    }

    pub fn recent_languages(&self) -> RecentLanguages {
        self.recent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// User edited the input text.
    pub fn on_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.lock_session().apply(SessionEvent::InputChanged(text));
        self.schedule_translation();
    }

    pub fn set_from_language(&self, code: impl Into<String>) {
        let code = code.into();
        self.record_recent(&code);
        self.lock_session()
            .apply(SessionEvent::FromLanguageChanged(code));
        self.schedule_translation();
    }

    pub fn set_to_language(&self, code: impl Into<String>) {
        let code = code.into();
        self.record_recent(&code);
        self.lock_session()
            .apply(SessionEvent::ToLanguageChanged(code));
        self.schedule_translation();
    }

    /// Swap the language pair along with input/translation texts.
    pub fn swap_languages(&self) {
        self.lock_session().apply(SessionEvent::LanguagesSwapped);
        self.schedule_translation();
    }

    /// Run the translation immediately, bypassing the debounce.
    pub async fn translate_now(&self) {
        self.debouncer.cancel();
        if let Some(request) = self.pending_request() {
            Self::run_translation(Arc::clone(&self.session), Arc::clone(&self.backend), request)
                .await;
        }
    }

    /// Capture one utterance and treat its transcript as typed input.
    pub async fn capture_voice(&self, input: &dyn SpeechInput) -> AppResult<()> {
        let language = self.lock_session().from_language.clone();
        let transcript = input.capture(&language).await?;
        self.on_input(transcript);
        Ok(())
    }

    pub fn speak_input(&self, output: &dyn SpeechOutput) -> AppResult<()> {
        let (text, language) = {
            let session = self.lock_session();
            (session.input_text.clone(), session.from_language.clone())
        };
        if text.is_empty() {
            return Ok(());
        }
        output.speak(&text, &language)
    }

    pub fn speak_translation(&self, output: &dyn SpeechOutput) -> AppResult<()> {
        let (text, language) = {
            let session = self.lock_session();
            (session.translation.clone(), session.to_language.clone())
        };
        if text.is_empty() {
            return Ok(());
        }
        output.speak(&text, &language)
    }

    pub fn copy_translation(&self, clipboard: &dyn ClipboardAccess) -> AppResult<()> {
        let text = self.lock_session().translation.clone();
        clipboard.copy(&text)
    }

    fn schedule_translation(&self) {
        let Some(request) = self.pending_request() else {
            // Nothing to translate; drop any pending call
            self.debouncer.cancel();
            return;
        };

        let session = Arc::clone(&self.session);
        let backend = Arc::clone(&self.backend);
        self.debouncer
            .schedule(Self::run_translation(session, backend, request));
    }

    async fn run_translation(
        session: Arc<Mutex<TranslatorSession>>,
        backend: Arc<dyn Translator>,
        request: TranslateRequest,
    ) {
        session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .apply(SessionEvent::TranslationStarted);

        let event = match backend.translate(&request).await {
            Ok(translated) => SessionEvent::TranslationReceived(translated),
            Err(e) => {
                eprintln!("[Controller] Translation error: {}", e);
                SessionEvent::TranslationFailed
            }
        };

        session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .apply(event);
    }

    fn pending_request(&self) -> Option<TranslateRequest> {
        let session = self.lock_session();
        if session.input_text.trim().is_empty()
            || session.from_language.is_empty()
            || session.to_language.is_empty()
        {
            return None;
        }
        Some(TranslateRequest::new(
            session.input_text.clone(),
            session.from_language.clone(),
            session.to_language.clone(),
        ))
    }

    fn record_recent(&self, code: &str) {
        self.recent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .add(code);
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, TranslatorSession> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }
}
