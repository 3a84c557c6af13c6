use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use taskpad_core::{Interpreter, Outcome, StoreError, StoreResult, Task, TaskStore};

/// In-memory store that records every save, so tests can assert exactly
/// when and with what the interpreter persists.
#[derive(Default)]
struct RecordingStore {
    saves: Rc<RefCell<Vec<Vec<Task>>>>,
}

impl TaskStore for RecordingStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        Ok(Vec::new())
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        self.saves.borrow_mut().push(tasks.to_vec());
        Ok(())
    }
}

/// Store whose saves always fail, for the fatal-propagation path.
struct BrokenStore;

impl TaskStore for BrokenStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        Ok(Vec::new())
    }

    fn save(&self, _tasks: &[Task]) -> StoreResult<()> {
        Err(StoreError::Io {
            path: PathBuf::from("data/taskpad.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

fn fresh() -> (Interpreter<RecordingStore>, Rc<RefCell<Vec<Vec<Task>>>>) {
    let store = RecordingStore::default();
    let saves = Rc::clone(&store.saves);
    (Interpreter::new(store, Vec::new()), saves)
}

fn reply(interpreter: &mut Interpreter<RecordingStore>, input: &str) -> String {
    match interpreter.execute(input).expect("command should not be fatal") {
        Outcome::Reply(feedback) => feedback,
        Outcome::Farewell(feedback) => panic!("unexpected farewell: {feedback}"),
    }
}

#[test]
fn todo_appends_reports_count_and_saves() {
    let (mut interpreter, saves) = fresh();

    let feedback = reply(&mut interpreter, "todo buy milk");
    assert_eq!(
        feedback,
        "Added this task:\n  [T][ ] buy milk\nYou now have 1 task(s) in the list"
    );
    assert_eq!(interpreter.tasks(), &[Task::todo("buy milk")]);
    assert_eq!(saves.borrow().as_slice(), &[vec![Task::todo("buy milk")]]);
}

#[test]
fn add_then_list_shows_one_numbered_entry() {
    let (mut interpreter, _) = fresh();

    reply(&mut interpreter, "todo buy milk");
    let feedback = reply(&mut interpreter, "list");
    assert_eq!(feedback, "Here is your task list:\n1.[T][ ] buy milk");
}

#[test]
fn deadline_add_then_list_shows_the_by_suffix() {
    let (mut interpreter, _) = fresh();

    reply(&mut interpreter, "deadline submit report /by Friday");
    let feedback = reply(&mut interpreter, "list");
    assert_eq!(
        feedback,
        "Here is your task list:\n1.[D][ ] submit report (by: Friday)"
    );
}

#[test]
fn event_add_then_list_shows_the_at_suffix() {
    let (mut interpreter, _) = fresh();

    reply(&mut interpreter, "event standup /at Mon 9am");
    let feedback = reply(&mut interpreter, "list");
    assert_eq!(
        feedback,
        "Here is your task list:\n1.[E][ ] standup (at: Mon 9am)"
    );
}

#[test]
fn done_marks_the_task_and_stays_successful_when_repeated() {
    let (mut interpreter, saves) = fresh();
    reply(&mut interpreter, "todo buy milk");

    let first = reply(&mut interpreter, "done 1");
    assert_eq!(first, "Marked this task as done:\n  [T][X] buy milk");

    let second = reply(&mut interpreter, "done 1");
    assert_eq!(second, first);
    assert!(interpreter.tasks()[0].done);
    // add + two done commands, every mutating command persists
    assert_eq!(saves.borrow().len(), 3);
}

#[test]
fn delete_removes_the_task_and_renumbers_the_rest() {
    let (mut interpreter, _) = fresh();
    reply(&mut interpreter, "todo first");
    reply(&mut interpreter, "todo second");

    let feedback = reply(&mut interpreter, "delete 1");
    assert_eq!(
        feedback,
        "Removed this task:\n  [T][ ] first\nYou now have 1 task(s) in the list"
    );
    let feedback = reply(&mut interpreter, "list");
    assert_eq!(feedback, "Here is your task list:\n1.[T][ ] second");
}

#[test]
fn out_of_range_and_non_numeric_indexes_change_nothing() {
    let (mut interpreter, saves) = fresh();
    reply(&mut interpreter, "todo buy milk");
    let saves_after_add = saves.borrow().len();
    let snapshot = interpreter.tasks().to_vec();

    for input in ["done 0", "done abc", "done 2", "delete 0", "delete abc", "delete 2"] {
        let feedback = reply(&mut interpreter, input);
        assert!(
            feedback.starts_with("Oops! there is no task numbered"),
            "unexpected feedback for `{input}`: {feedback}"
        );
    }

    assert_eq!(interpreter.tasks(), snapshot.as_slice());
    assert_eq!(saves.borrow().len(), saves_after_add);
}

#[test]
fn empty_todo_description_is_rejected_without_a_save() {
    let (mut interpreter, saves) = fresh();

    for input in ["todo", "todo    "] {
        let feedback = reply(&mut interpreter, input);
        assert_eq!(feedback, "Oops! the description of a todo cannot be empty");
    }
    assert!(interpreter.tasks().is_empty());
    assert!(saves.borrow().is_empty());
}

#[test]
fn deadline_without_its_marker_is_rejected_without_a_save() {
    let (mut interpreter, saves) = fresh();

    let feedback = reply(&mut interpreter, "deadline submit report");
    assert!(feedback.starts_with("Oops! a deadline needs ` /by `"));
    assert!(interpreter.tasks().is_empty());
    assert!(saves.borrow().is_empty());
}

#[test]
fn unrecognized_command_is_rejected_without_a_save() {
    let (mut interpreter, saves) = fresh();

    let feedback = reply(&mut interpreter, "frobnicate");
    assert_eq!(feedback, "Oops! I don't know what `frobnicate` means");
    assert!(interpreter.tasks().is_empty());
    assert!(saves.borrow().is_empty());
}

#[test]
fn bye_produces_a_farewell_outcome() {
    let (mut interpreter, _) = fresh();

    let outcome = interpreter.execute("bye").expect("bye should not be fatal");
    assert!(matches!(outcome, Outcome::Farewell(_)));
    assert_eq!(outcome.feedback(), "Bye! See you next time.");
}

#[test]
fn a_failed_save_surfaces_as_a_fatal_store_error() {
    let mut interpreter = Interpreter::new(BrokenStore, Vec::new());

    let err = interpreter.execute("todo buy milk").unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn listing_an_empty_list_only_prints_the_header() {
    let (mut interpreter, saves) = fresh();

    let feedback = reply(&mut interpreter, "list");
    assert_eq!(feedback, "Here is your task list:\n");
    assert!(saves.borrow().is_empty());
}
