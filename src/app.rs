//! Application state machine.
//!
//! One `App` owns the session store, the mock OTP service and the quiz/tutor
//! state. Background AI calls are spawned onto the runtime and report back as
//! [`AppEvent`]s over the channel drained by the event loop.

use tokio::sync::mpsc;
use tracing::warn;

use crate::ai::{self, OpenRouterClient};
use crate::auth::{OtpService, SendOutcome, VerifyOutcome, is_college_email};
use crate::data::courses::{self, Course, Subject, Topic, Year};
use crate::models::{CHOICES_PER_QUESTION, GeneratedQuestion, UserProfile};
use crate::session::SessionStore;

/// Default number of questions per generated quiz.
pub const QUIZ_LENGTH: usize = 10;

/// Which login step the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    Email,
    Code,
}

/// Which settings field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Name,
    Phone,
}

/// One tutor exchange shown on the learning screen.
#[derive(Debug, Clone)]
pub struct TutorExchange {
    pub question: String,
    pub answer: String,
}

/// Current screen of the app.
pub enum Screen {
    Login {
        phase: LoginPhase,
        email_input: String,
        code_input: String,
        error: Option<String>,
        info: Option<String>,
    },
    Courses {
        cursor: usize,
    },
    Years {
        cursor: usize,
    },
    Subjects {
        cursor: usize,
    },
    Topics {
        cursor: usize,
    },
    Learning {
        input: String,
        transcript: Vec<TutorExchange>,
        notice: Option<String>,
        busy: bool,
        scroll: usize,
    },
    GeneratingQuiz,
    Quiz,
    Results,
    Settings {
        name_input: String,
        phone_input: String,
        focus: SettingsField,
        message: Option<String>,
    },
}

/// Results of background work, delivered to the event loop.
pub enum AppEvent {
    QuizReady(Vec<GeneratedQuestion>),
    QuizFailed(String),
    TutorAnswered { question: String, answer: String },
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    session: SessionStore,
    otp: OtpService,
    client: OpenRouterClient,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    questions: Vec<GeneratedQuestion>,
    current_question_index: usize,
    selected_option: usize,
    answers: Vec<Option<usize>>,
    result_scroll: usize,
}

impl App {
    pub fn new(
        session: SessionStore,
        client: OpenRouterClient,
        events_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let screen = if session.is_logged_in() {
            Screen::Courses { cursor: 0 }
        } else {
            Screen::Login {
                phase: LoginPhase::Email,
                email_input: String::new(),
                code_input: String::new(),
                error: None,
                info: None,
            }
        };

        Self {
            screen,
            should_quit: false,
            session,
            otp: OtpService::new(),
            client,
            events_tx,
            questions: Vec::new(),
            current_question_index: 0,
            selected_option: 0,
            answers: Vec::new(),
            result_scroll: 0,
        }
    }

    // ----- login -----

    pub fn submit_email(&mut self) {
        let Screen::Login {
            phase,
            email_input,
            error,
            info,
            ..
        } = &mut self.screen
        else {
            return;
        };

        let email = email_input.trim().to_lowercase();
        if email.is_empty() {
            *error = Some("Please enter your email".to_string());
            return;
        }
        if !is_college_email(&email) {
            *error = Some(
                "Please use a valid college email (e.g., 2301201171@krmu.edu.in)".to_string(),
            );
            return;
        }

        *email_input = email.clone();
        match self.otp.send_otp(&email) {
            SendOutcome::Sent { code, .. } => {
                *phase = LoginPhase::Code;
                *error = None;
                // No mail transport here; surface the code on screen.
                *info = Some(format!("OTP sent (email not configured): {code}"));
            }
            SendOutcome::Throttled { retry_after } => {
                *error = Some(format!(
                    "OTP already sent. Please wait {} seconds before requesting again.",
                    retry_after.as_secs().max(1)
                ));
            }
        }
    }

    pub fn resend_otp(&mut self) {
        if let Screen::Login {
            phase: LoginPhase::Code,
            code_input,
            ..
        } = &mut self.screen
        {
            code_input.clear();
        } else {
            return;
        }
        // Re-runs throttle and delivery for the already-validated email.
        if let Screen::Login { phase, .. } = &mut self.screen {
            *phase = LoginPhase::Email;
        }
        self.submit_email();
    }

    pub fn submit_code(&mut self) {
        let Screen::Login {
            email_input,
            code_input,
            error,
            ..
        } = &mut self.screen
        else {
            return;
        };

        if code_input.len() != 6 {
            *error = Some("OTP must be 6 digits".to_string());
            return;
        }

        let email = email_input.clone();
        let code = code_input.clone();
        match self.otp.verify_otp(&email, &code) {
            VerifyOutcome::Verified => {
                if let Err(err) = self.session.login(UserProfile::from_email(&email)) {
                    warn!(%err, "failed to persist login");
                }
                self.screen = Screen::Courses { cursor: 0 };
            }
            VerifyOutcome::Invalid { attempts_left } => {
                self.set_login_error(format!(
                    "Invalid OTP. {attempts_left} attempts remaining."
                ));
            }
            VerifyOutcome::Expired => {
                self.set_login_error("OTP expired. Please request a new one.".to_string());
            }
            VerifyOutcome::TooManyAttempts => {
                self.set_login_error("Too many attempts. Please request a new OTP.".to_string());
            }
            VerifyOutcome::NotRequested => {
                self.set_login_error("No OTP found. Please request a new one.".to_string());
            }
        }
    }

    pub fn login_push(&mut self, c: char) {
        let Screen::Login {
            phase,
            email_input,
            code_input,
            error,
            ..
        } = &mut self.screen
        else {
            return;
        };
        *error = None;
        match phase {
            LoginPhase::Email => email_input.push(c),
            LoginPhase::Code => {
                if c.is_ascii_digit() && code_input.len() < 6 {
                    code_input.push(c);
                }
            }
        }
    }

    pub fn login_pop(&mut self) {
        let Screen::Login {
            phase,
            email_input,
            code_input,
            error,
            ..
        } = &mut self.screen
        else {
            return;
        };
        *error = None;
        match phase {
            LoginPhase::Email => {
                email_input.pop();
            }
            LoginPhase::Code => {
                code_input.pop();
            }
        }
    }

    pub fn login_back_to_email(&mut self) {
        if let Screen::Login {
            phase,
            code_input,
            error,
            info,
            ..
        } = &mut self.screen
        {
            *phase = LoginPhase::Email;
            code_input.clear();
            *error = None;
            *info = None;
        }
    }

    fn set_login_error(&mut self, message: String) {
        if let Screen::Login { error, .. } = &mut self.screen {
            *error = Some(message);
        }
    }

    pub fn logout(&mut self) {
        if let Err(err) = self.session.logout() {
            warn!(%err, "failed to clear session");
        }
        self.questions.clear();
        self.answers.clear();
        self.screen = Screen::Login {
            phase: LoginPhase::Email,
            email_input: String::new(),
            code_input: String::new(),
            error: None,
            info: None,
        };
    }

    // ----- catalog navigation -----

    pub fn courses(&self) -> &'static [Course] {
        courses::catalog()
    }

    pub fn selected_course(&self) -> Option<&'static Course> {
        self.session
            .selection()
            .course
            .as_deref()
            .and_then(courses::find_course)
    }

    pub fn selected_year(&self) -> Option<&'static Year> {
        let course = self.selected_course()?;
        course.year(self.session.selection().year.as_deref()?)
    }

    pub fn selected_subject(&self) -> Option<&'static Subject> {
        let year = self.selected_year()?;
        year.subject(self.session.selection().subject.as_deref()?)
    }

    pub fn selected_topic(&self) -> Option<&'static Topic> {
        let subject = self.selected_subject()?;
        subject.topic(self.session.selection().topic.as_deref()?)
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.session.profile()
    }

    /// Number of rows on the current selection screen.
    pub fn selection_len(&self) -> usize {
        match &self.screen {
            Screen::Courses { .. } => self.courses().len(),
            Screen::Years { .. } => self.selected_course().map_or(0, |c| c.years.len()),
            Screen::Subjects { .. } => self.selected_year().map_or(0, |y| y.subjects.len()),
            Screen::Topics { .. } => self.selected_subject().map_or(0, |s| s.topics.len()),
            _ => 0,
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.selection_len();
        if len == 0 {
            return;
        }
        let cursor = match &mut self.screen {
            Screen::Courses { cursor }
            | Screen::Years { cursor }
            | Screen::Subjects { cursor }
            | Screen::Topics { cursor } => cursor,
            _ => return,
        };
        *cursor = (*cursor as isize + delta).rem_euclid(len as isize) as usize;
    }

    /// Enter on a selection screen: persist the choice and descend.
    pub fn confirm_selection(&mut self) {
        match &self.screen {
            Screen::Courses { cursor } => {
                if let Some(course) = self.courses().get(*cursor) {
                    if let Err(err) = self.session.select_course(course.code.to_string()) {
                        warn!(%err, "failed to persist course selection");
                    }
                    self.screen = Screen::Years { cursor: 0 };
                }
            }
            Screen::Years { cursor } => {
                let year = self
                    .selected_course()
                    .and_then(|c| c.years.get(*cursor).map(|y| y.label.to_string()));
                if let Some(label) = year {
                    if let Err(err) = self.session.select_year(label) {
                        warn!(%err, "failed to persist year selection");
                    }
                    self.screen = Screen::Subjects { cursor: 0 };
                }
            }
            Screen::Subjects { cursor } => {
                let subject = self
                    .selected_year()
                    .and_then(|y| y.subjects.get(*cursor).map(|s| s.code.to_string()));
                if let Some(code) = subject {
                    if let Err(err) = self.session.select_subject(code) {
                        warn!(%err, "failed to persist subject selection");
                    }
                    self.screen = Screen::Topics { cursor: 0 };
                }
            }
            Screen::Topics { cursor } => {
                let topic = self
                    .selected_subject()
                    .and_then(|s| s.topics.get(*cursor).map(|t| t.title.to_string()));
                if let Some(title) = topic {
                    if let Err(err) = self.session.select_topic(title) {
                        warn!(%err, "failed to persist topic selection");
                    }
                    self.enter_learning(None);
                }
            }
            _ => {}
        }
    }

    /// Esc on a selection or learning screen: climb one level.
    pub fn go_back(&mut self) {
        self.screen = match &self.screen {
            Screen::Years { .. } => Screen::Courses { cursor: 0 },
            Screen::Subjects { .. } => Screen::Years { cursor: 0 },
            Screen::Topics { .. } => Screen::Subjects { cursor: 0 },
            Screen::Learning { .. } => Screen::Topics { cursor: 0 },
            Screen::Settings { .. } => Screen::Courses { cursor: 0 },
            _ => return,
        };
    }

    fn enter_learning(&mut self, notice: Option<String>) {
        self.screen = Screen::Learning {
            input: String::new(),
            transcript: Vec::new(),
            notice,
            busy: false,
            scroll: 0,
        };
    }

    // ----- tutor -----

    pub fn ask_tutor(&mut self) {
        let topic = match self.selected_topic() {
            Some(t) => t.title.to_string(),
            None => return,
        };

        let Screen::Learning { input, busy, .. } = &mut self.screen else {
            return;
        };
        let question = input.trim().to_string();
        if question.is_empty() || *busy {
            return;
        }
        input.clear();
        *busy = true;

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let answer = match ai::tutor::answer(&client, &topic, &question).await {
                Ok(answer) => answer,
                Err(err) => {
                    warn!(%err, topic, "tutor call failed");
                    ai::tutor::offline_answer(&topic)
                }
            };
            let _ = tx.send(AppEvent::TutorAnswered { question, answer });
        });
    }

    pub fn learning_push(&mut self, c: char) {
        if let Screen::Learning { input, .. } = &mut self.screen {
            input.push(c);
        }
    }

    pub fn learning_pop(&mut self) {
        if let Screen::Learning { input, .. } = &mut self.screen {
            input.pop();
        }
    }

    pub fn learning_scroll(&mut self, delta: isize) {
        if let Screen::Learning { scroll, .. } = &mut self.screen {
            *scroll = scroll.saturating_add_signed(delta);
        }
    }

    // ----- quiz -----

    pub fn start_quiz_generation(&mut self) {
        let Some(topic) = self.selected_topic() else {
            return;
        };
        let title = topic.title.to_string();
        let context = topic.narration.unwrap_or_default().to_string();

        self.screen = Screen::GeneratingQuiz;

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            match ai::quiz::generate(&client, &title, &context, QUIZ_LENGTH).await {
                Ok(questions) => {
                    let _ = tx.send(AppEvent::QuizReady(questions));
                }
                Err(err) => {
                    let _ = tx.send(AppEvent::QuizFailed(err.to_string()));
                }
            }
        });
    }

    /// Apply a background-task result to the state machine.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::QuizReady(questions) => {
                if !matches!(self.screen, Screen::GeneratingQuiz) {
                    return;
                }
                let total = questions.len();
                self.questions = questions;
                self.answers = vec![None; total];
                self.current_question_index = 0;
                self.selected_option = 0;
                self.screen = Screen::Quiz;
            }
            AppEvent::QuizFailed(message) => {
                if matches!(self.screen, Screen::GeneratingQuiz) {
                    self.enter_learning(Some(format!("Quiz generation failed: {message}")));
                }
            }
            AppEvent::TutorAnswered { question, answer } => {
                if let Screen::Learning {
                    transcript, busy, ..
                } = &mut self.screen
                {
                    transcript.push(TutorExchange { question, answer });
                    *busy = false;
                }
            }
        }
    }

    pub fn current_question(&self) -> Option<&GeneratedQuestion> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn questions(&self) -> &[GeneratedQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % CHOICES_PER_QUESTION;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option =
            (self.selected_option + CHOICES_PER_QUESTION - 1) % CHOICES_PER_QUESTION;
    }

    pub fn submit_answer(&mut self) {
        if self.current_question_index >= self.questions.len() {
            return;
        }
        self.answers[self.current_question_index] = Some(self.selected_option);
        self.current_question_index += 1;
        self.selected_option = 0;

        if self.current_question_index >= self.questions.len() {
            self.result_scroll = 0;
            self.screen = Screen::Results;
        }
    }

    pub fn calculate_score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| *answer == &Some(question.correct_index))
            .count()
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.questions.len() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Retake the same generated quiz from the top.
    pub fn restart_quiz(&mut self) {
        self.current_question_index = 0;
        self.selected_option = 0;
        self.answers = vec![None; self.questions.len()];
        self.result_scroll = 0;
        self.screen = Screen::Quiz;
    }

    pub fn abandon_quiz(&mut self) {
        self.questions.clear();
        self.answers.clear();
        self.enter_learning(None);
    }

    pub fn return_to_topics(&mut self) {
        self.questions.clear();
        self.answers.clear();
        self.screen = Screen::Topics { cursor: 0 };
    }

    // ----- settings -----

    pub fn open_settings(&mut self) {
        let (name, phone) = self
            .session
            .profile()
            .map(|p| (p.name.clone(), p.phone.clone()))
            .unwrap_or_default();
        self.screen = Screen::Settings {
            name_input: name,
            phone_input: phone,
            focus: SettingsField::Name,
            message: None,
        };
    }

    pub fn settings_toggle_focus(&mut self) {
        if let Screen::Settings { focus, .. } = &mut self.screen {
            *focus = match focus {
                SettingsField::Name => SettingsField::Phone,
                SettingsField::Phone => SettingsField::Name,
            };
        }
    }

    pub fn settings_push(&mut self, c: char) {
        if let Screen::Settings {
            name_input,
            phone_input,
            focus,
            message,
        } = &mut self.screen
        {
            *message = None;
            match focus {
                SettingsField::Name => name_input.push(c),
                SettingsField::Phone => {
                    if c.is_ascii_digit() && phone_input.len() < 10 {
                        phone_input.push(c);
                    }
                }
            }
        }
    }

    pub fn settings_pop(&mut self) {
        if let Screen::Settings {
            name_input,
            phone_input,
            focus,
            message,
        } = &mut self.screen
        {
            *message = None;
            match focus {
                SettingsField::Name => {
                    name_input.pop();
                }
                SettingsField::Phone => {
                    phone_input.pop();
                }
            }
        }
    }

    pub fn save_settings(&mut self) {
        let Screen::Settings {
            name_input,
            phone_input,
            message,
            ..
        } = &mut self.screen
        else {
            return;
        };

        let fallback = self
            .session
            .profile()
            .map(|p| p.email.split('@').next().unwrap_or("").to_string())
            .unwrap_or_default();
        let name = {
            let trimmed = name_input.trim();
            if trimmed.is_empty() {
                fallback
            } else {
                trimmed.to_string()
            }
        };
        let phone = UserProfile::sanitize_phone(phone_input);

        *name_input = name.clone();
        *phone_input = phone.clone();
        *message = Some("Changes saved".to_string());

        if let Err(err) = self.session.update_profile(name, phone) {
            warn!(%err, "failed to persist profile");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn test_app(tag: &str) -> (App, mpsc::UnboundedReceiver<AppEvent>, PathBuf) {
        let dir = std::env::temp_dir().join(format!("lerno-app-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let session = SessionStore::load(&dir).unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(session, OpenRouterClient::with_api_key(None), tx);
        (app, rx, dir)
    }

    fn login(app: &mut App, email: &str) {
        if let Screen::Login { email_input, .. } = &mut app.screen {
            email_input.push_str(email);
        }
        app.submit_email();
        let code = match &app.screen {
            Screen::Login { info: Some(info), .. } => {
                info.rsplit(' ').next().unwrap().to_string()
            }
            _ => panic!("expected login info line"),
        };
        if let Screen::Login { code_input, .. } = &mut app.screen {
            code_input.push_str(&code);
        }
        app.submit_code();
    }

    #[test]
    fn test_starts_on_login_when_logged_out() {
        let (app, _rx, dir) = test_app("start");
        assert!(matches!(app.screen, Screen::Login { .. }));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rejects_non_college_email() {
        let (mut app, _rx, dir) = test_app("badmail");
        if let Screen::Login { email_input, .. } = &mut app.screen {
            email_input.push_str("someone@gmail.com");
        }
        app.submit_email();
        match &app.screen {
            Screen::Login { phase, error, .. } => {
                assert_eq!(*phase, LoginPhase::Email);
                assert!(error.as_deref().unwrap().contains("college email"));
            }
            _ => panic!("expected login screen"),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_full_login_and_selection_flow() {
        let (mut app, _rx, dir) = test_app("flow");
        login(&mut app, "alice@edu.in");
        assert!(matches!(app.screen, Screen::Courses { .. }));
        assert_eq!(app.profile().unwrap().name, "alice");

        app.confirm_selection(); // BCA
        assert!(matches!(app.screen, Screen::Years { .. }));
        app.confirm_selection(); // 1st Year
        assert!(matches!(app.screen, Screen::Subjects { .. }));
        app.confirm_selection(); // DBMS
        assert!(matches!(app.screen, Screen::Topics { .. }));
        app.move_cursor(1); // SQL
        app.confirm_selection();
        assert!(matches!(app.screen, Screen::Learning { .. }));
        assert_eq!(app.selected_topic().unwrap().title, "SQL");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_cursor_wraps() {
        let (mut app, _rx, dir) = test_app("wrap");
        login(&mut app, "alice@edu.in");
        app.move_cursor(-1);
        match &app.screen {
            Screen::Courses { cursor } => assert_eq!(*cursor, app.courses().len() - 1),
            _ => panic!("expected courses screen"),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_quiz_event_flow_and_scoring() {
        let (mut app, _rx, dir) = test_app("quiz");
        login(&mut app, "alice@edu.in");
        app.confirm_selection();
        app.confirm_selection();
        app.confirm_selection();
        app.move_cursor(1);
        app.confirm_selection();
        app.start_quiz_generation();
        assert!(matches!(app.screen, Screen::GeneratingQuiz));

        let questions = crate::ai::quiz::fallback_questions("SQL", 3);
        app.handle_event(AppEvent::QuizReady(questions.clone()));
        assert!(matches!(app.screen, Screen::Quiz));
        assert_eq!(app.total_questions(), 3);

        // Answer the first correctly, the rest wrong.
        for _ in 0..questions[0].correct_index {
            app.select_next_option();
        }
        app.submit_answer();
        for q in &questions[1..] {
            let wrong = (q.correct_index + 1) % CHOICES_PER_QUESTION;
            while app.selected_option() != wrong {
                app.select_next_option();
            }
            app.submit_answer();
        }
        assert!(matches!(app.screen, Screen::Results));
        assert_eq!(app.calculate_score(), 1);

        app.restart_quiz();
        assert!(matches!(app.screen, Screen::Quiz));
        assert_eq!(app.answers().iter().filter(|a| a.is_some()).count(), 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_quiz_failure_returns_to_learning_with_notice() {
        let (mut app, _rx, dir) = test_app("quizfail");
        login(&mut app, "alice@edu.in");
        app.confirm_selection();
        app.confirm_selection();
        app.confirm_selection();
        app.move_cursor(1);
        app.confirm_selection();
        app.start_quiz_generation();
        app.handle_event(AppEvent::QuizFailed("missing OPENROUTER_API_KEY".to_string()));
        match &app.screen {
            Screen::Learning { notice, .. } => {
                assert!(notice.as_deref().unwrap().contains("missing OPENROUTER_API_KEY"));
            }
            _ => panic!("expected learning screen"),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let (mut app, _rx, dir) = test_app("logout");
        login(&mut app, "alice@edu.in");
        app.logout();
        assert!(matches!(app.screen, Screen::Login { .. }));
        assert!(app.profile().is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_settings_save_sanitizes_phone() {
        let (mut app, _rx, dir) = test_app("settings");
        login(&mut app, "alice@edu.in");
        app.open_settings();
        if let Screen::Settings {
            name_input,
            phone_input,
            ..
        } = &mut app.screen
        {
            name_input.clear();
            phone_input.push_str("+91 9654679617");
        }
        app.save_settings();
        match &app.screen {
            Screen::Settings {
                name_input,
                phone_input,
                message,
                ..
            } => {
                // Empty name falls back to the email prefix.
                assert_eq!(name_input, "alice");
                assert_eq!(phone_input, "9654679617");
                assert_eq!(message.as_deref(), Some("Changes saved"));
            }
            _ => panic!("expected settings screen"),
        }
        assert_eq!(app.profile().unwrap().phone, "9654679617");
        let _ = fs::remove_dir_all(&dir);
    }
}
