use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

use super::*;
use crate::state::toast::ToastKind;

// =============================================================
// Fixtures
// =============================================================

impl SessionStore for RefCell<ChatSession> {
    fn update_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

type Reply = Result<String, ApiError>;

/// Answers with whatever the test sends down the queued channels.
#[derive(Default)]
struct ScriptedAnswers {
    asked: RefCell<Vec<(String, String)>>,
    replies: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
}

impl ScriptedAnswers {
    fn expect_one(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(rx);
        tx
    }
}

impl AnswerService for ScriptedAnswers {
    fn ask(&self, question: &str, document_reference: &str) -> impl Future<Output = Reply> {
        self.asked
            .borrow_mut()
            .push((question.to_owned(), document_reference.to_owned()));
        let reply = self.replies.borrow_mut().pop_front();
        async move {
            match reply {
                Some(rx) => rx.await.unwrap_or_else(|_| Err(ApiError::Network("dropped".to_owned()))),
                None => Err(ApiError::Unavailable),
            }
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    seen: RefCell<Vec<(ToastKind, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.seen.borrow_mut().push((kind, message.to_owned()));
    }
}

fn raw(name: &str, mime: &str) -> RawFile {
    RawFile { name: name.to_owned(), size_bytes: 2048, mime_type: mime.to_owned(), last_modified_ms: 0.0 }
}

fn counted(url: &str, releases: &Arc<AtomicUsize>) -> LocalHandle {
    let releases = Arc::clone(releases);
    LocalHandle::new(url, move |_| {
        releases.fetch_add(1, Ordering::SeqCst);
    })
}

fn ready_session(name: &str) -> ChatSession {
    let mut session = ChatSession::new();
    session.mount();
    session
        .attach_document(raw(name, "application/pdf"), LocalHandle::detached("blob:doc"), None)
        .unwrap();
    session
}

// =============================================================
// Phases and the document slot
// =============================================================

#[test]
fn new_session_is_idle_until_mounted() {
    let mut session = ChatSession::new();
    assert_eq!(session.phase(), SessionPhase::Idle);
    session.mount();
    assert_eq!(session.phase(), SessionPhase::AwaitingDocument);
    assert!(session.messages().is_empty());
    assert!(!session.is_processing());
}

#[test]
fn attach_moves_to_ready() {
    let mut session = ChatSession::new();
    session.mount();
    let doc = session
        .attach_document(raw("a.pdf", "application/pdf"), LocalHandle::detached("blob:a"), None)
        .unwrap();
    assert_eq!(doc.name, "a.pdf");
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert_eq!(session.document_reference(), Ok("a.pdf"));
}

#[test]
fn attach_rejects_unsupported_type_and_keeps_state() {
    let mut session = ChatSession::new();
    session.mount();
    let err = session
        .attach_document(raw("photo.png", "image/png"), LocalHandle::detached(""), None)
        .unwrap_err();
    assert_eq!(err, SessionError::UnsupportedFormat { mime_type: "image/png".to_owned() });
    assert_eq!(session.phase(), SessionPhase::AwaitingDocument);
    assert!(session.document().is_none());
}

#[test]
fn rejected_attach_keeps_existing_document_and_thread() {
    let releases = Arc::new(AtomicUsize::new(0));
    let mut session = ChatSession::new();
    session.attach_document(raw("a.pdf", "application/pdf"), counted("blob:a", &releases), None).unwrap();
    session.begin_submit("hi").unwrap();
    session.resolve_submit(Ok("hello".to_owned())).unwrap();

    assert!(session.attach_document(raw("x.png", "image/png"), LocalHandle::detached(""), None).is_err());
    assert_eq!(session.document().map(|d| d.name.as_str()), Some("a.pdf"));
    assert_eq!(session.messages().len(), 2);
    assert_eq!(releases.load(Ordering::SeqCst), 0);
}

#[test]
fn replacing_document_releases_previous_handle_and_clears_thread() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let mut session = ChatSession::new();
    session.attach_document(raw("a.pdf", "application/pdf"), counted("blob:a", &first), None).unwrap();
    session.begin_submit("q").unwrap();
    session.resolve_submit(Ok("r".to_owned())).unwrap();

    session.attach_document(raw("b.txt", "text/plain"), counted("blob:b", &second), None).unwrap();
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
    assert!(session.messages().is_empty());
    assert_eq!(session.document().map(|d| d.name.as_str()), Some("b.txt"));
}

#[test]
fn remove_document_releases_once_and_clears() {
    let releases = Arc::new(AtomicUsize::new(0));
    let mut session = ChatSession::new();
    session.mount();
    session.attach_document(raw("a.pdf", "application/pdf"), counted("blob:a", &releases), None).unwrap();
    session.begin_submit("q").unwrap();
    session.resolve_submit(Ok("r".to_owned())).unwrap();

    assert!(session.remove_document());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert!(session.messages().is_empty());
    assert_eq!(session.phase(), SessionPhase::AwaitingDocument);

    assert!(!session.remove_document());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn teardown_releases_handle_and_returns_to_idle() {
    let releases = Arc::new(AtomicUsize::new(0));
    let mut session = ChatSession::new();
    session.mount();
    session.attach_document(raw("a.pdf", "application/pdf"), counted("blob:a", &releases), None).unwrap();
    session.teardown();
    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(session.messages().is_empty());
}

#[test]
fn clear_keeps_document() {
    let mut session = ready_session("a.pdf");
    session.begin_submit("q").unwrap();
    session.resolve_submit(Ok("r".to_owned())).unwrap();
    session.clear();
    assert!(session.messages().is_empty());
    assert_eq!(session.phase(), SessionPhase::Ready);
}

#[test]
fn remote_path_becomes_document_reference() {
    let mut session = ChatSession::new();
    session
        .attach_document(
            raw("a.pdf", "application/pdf"),
            LocalHandle::detached(""),
            Some("uploads/a.pdf".to_owned()),
        )
        .unwrap();
    let pending = session.begin_submit("q").unwrap();
    assert_eq!(pending.document_reference, "uploads/a.pdf");
}

// =============================================================
// begin_submit / resolve_submit
// =============================================================

#[test]
fn begin_submit_requires_document() {
    let mut session = ChatSession::new();
    session.mount();
    assert_eq!(session.document_reference(), Err(SessionError::NoDocumentAttached));
    assert!(session.begin_submit("hello").is_none());
    assert!(session.messages().is_empty());
}

#[test]
fn begin_submit_ignores_blank_questions() {
    let mut session = ready_session("a.pdf");
    assert!(session.begin_submit("").is_none());
    assert!(session.begin_submit("   \n\t").is_none());
    assert!(session.messages().is_empty());
    assert!(!session.is_processing());
}

#[test]
fn begin_submit_appends_user_message_and_enters_sending() {
    let mut session = ready_session("a.pdf");
    let pending = session.begin_submit("What is this?").unwrap();
    assert_eq!(pending.question, "What is this?");
    assert_eq!(pending.document_reference, "a.pdf");
    assert_eq!(session.phase(), SessionPhase::Sending);
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::User);
    assert_eq!(session.messages()[0].content, "What is this?");
}

#[test]
fn begin_submit_rejects_second_question_while_sending() {
    let mut session = ready_session("a.pdf");
    assert!(session.begin_submit("one").is_some());
    assert!(session.begin_submit("two").is_none());
    assert_eq!(session.messages().len(), 1);
}

#[test]
fn resolve_submit_failure_keeps_user_message() {
    let mut session = ready_session("a.pdf");
    session.begin_submit("q").unwrap();
    assert_eq!(session.resolve_submit(Err(SessionError::RequestFailed)), Err(SessionError::RequestFailed));
    assert!(!session.is_processing());
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::User);
}

#[test]
fn late_reply_is_appended_after_clear() {
    let mut session = ready_session("a.pdf");
    session.begin_submit("q").unwrap();
    session.clear();
    session.resolve_submit(Ok("late".to_owned())).unwrap();
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::Assistant);
}

#[test]
fn message_ids_are_unique() {
    let mut session = ready_session("a.pdf");
    session.begin_submit("q").unwrap();
    session.resolve_submit(Ok("r".to_owned())).unwrap();
    let ids: Vec<_> = session.messages().iter().map(|m| m.id.clone()).collect();
    assert_ne!(ids[0], ids[1]);
}

// =============================================================
// submit driver
// =============================================================

#[test]
fn submit_is_sending_until_reply_arrives() {
    let store = Rc::new(RefCell::new(ready_session("a.pdf")));
    let answers = Rc::new(ScriptedAnswers::default());
    let notifier = Rc::new(RecordingNotifier::default());
    let reply = answers.expect_one();
    let accepted = Rc::new(Cell::new(None));

    let mut pool = LocalPool::new();
    {
        let (store, answers, notifier, accepted) =
            (Rc::clone(&store), Rc::clone(&answers), Rc::clone(&notifier), Rc::clone(&accepted));
        pool.spawner()
            .spawn_local(async move {
                accepted.set(Some(submit(&*store, &*answers, &*notifier, "What is this?").await));
            })
            .unwrap();
    }
    pool.run_until_stalled();

    assert_eq!(store.borrow().phase(), SessionPhase::Sending);
    assert_eq!(store.borrow().messages().len(), 1);
    assert_eq!(*answers.asked.borrow(), vec![("What is this?".to_owned(), "a.pdf".to_owned())]);

    reply.send(Ok("It is a contract.".to_owned())).unwrap();
    pool.run_until_stalled();

    let session = store.borrow();
    assert_eq!(accepted.get(), Some(true));
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[1].role, Role::Assistant);
    assert_eq!(session.messages()[1].content, "It is a contract.");
    assert!(notifier.seen.borrow().is_empty());
}

#[test]
fn back_to_back_submits_ask_once() {
    let store = Rc::new(RefCell::new(ready_session("a.pdf")));
    let answers = Rc::new(ScriptedAnswers::default());
    let notifier = Rc::new(RecordingNotifier::default());
    let reply = answers.expect_one();
    let results = Rc::new(RefCell::new(Vec::new()));

    let mut pool = LocalPool::new();
    for question in ["first", "second"] {
        let (store, answers, notifier, results) =
            (Rc::clone(&store), Rc::clone(&answers), Rc::clone(&notifier), Rc::clone(&results));
        pool.spawner()
            .spawn_local(async move {
                let ok = submit(&*store, &*answers, &*notifier, question).await;
                results.borrow_mut().push((question, ok));
            })
            .unwrap();
    }
    pool.run_until_stalled();
    assert_eq!(results.borrow().len(), 1);
    assert!(!results.borrow()[0].1);
    assert_eq!(answers.asked.borrow().len(), 1);
    assert_eq!(store.borrow().messages().len(), 1);

    reply.send(Ok("answer".to_owned())).unwrap();
    pool.run_until_stalled();
    assert_eq!(results.borrow().iter().filter(|(_, ok)| *ok).count(), 1);
    assert_eq!(store.borrow().messages().len(), 2);
}

#[test]
fn blank_submit_does_not_ask() {
    let store = RefCell::new(ready_session("a.pdf"));
    let answers = ScriptedAnswers::default();
    let notifier = RecordingNotifier::default();
    let accepted = submit(&store, &answers, &notifier, "  ").now_or_never();
    assert_eq!(accepted, Some(false));
    assert!(answers.asked.borrow().is_empty());
    assert!(store.borrow().messages().is_empty());
}

#[test]
fn failed_request_notifies_and_keeps_user_message() {
    let store = RefCell::new(ready_session("a.pdf"));
    let answers = ScriptedAnswers::default();
    let notifier = RecordingNotifier::default();
    let reply = answers.expect_one();
    reply
        .send(Err(ApiError::Status { status: 500, message: "boom".to_owned() }))
        .unwrap();

    let accepted = submit(&store, &answers, &notifier, "q").now_or_never();
    assert_eq!(accepted, Some(true));

    let session = store.borrow();
    assert!(!session.is_processing());
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::User);
    assert_eq!(*notifier.seen.borrow(), vec![(ToastKind::Error, REQUEST_FAILED_MESSAGE.to_owned())]);
}

#[test]
fn dropped_submit_clears_in_flight_flag() {
    let store = RefCell::new(ready_session("a.pdf"));
    let answers = ScriptedAnswers::default();
    let notifier = RecordingNotifier::default();
    let _reply = answers.expect_one();

    assert!(submit(&store, &answers, &notifier, "q").now_or_never().is_none());

    let session = store.borrow();
    assert!(!session.is_processing());
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert_eq!(session.messages().len(), 1);
    assert!(notifier.seen.borrow().is_empty());
}

#[test]
fn submit_without_document_is_rejected() {
    let mut session = ChatSession::new();
    session.mount();
    let store = RefCell::new(session);
    let answers = ScriptedAnswers::default();
    let notifier = RecordingNotifier::default();
    assert_eq!(submit(&store, &answers, &notifier, "q").now_or_never(), Some(false));
    assert!(answers.asked.borrow().is_empty());
}
