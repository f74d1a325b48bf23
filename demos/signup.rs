//! Sign-up form demo: shows the commit notifications in action. `on_change`
//! fires on keystrokes that move a field away from its initial value,
//! `on_complete` fires once when a field is left with a new value.

use std::{cell::RefCell, rc::Rc};

use anyhow::Result;
use floatinput::{FieldConfig, FloatInputUi, InputKind};

fn main() -> Result<()> {
    let commits: Rc<RefCell<Vec<String>>> = Rc::default();

    let log = Rc::clone(&commits);
    let name = FieldConfig::new("name")
        .with_placeholder("Full name")
        .on_complete(move |name, value| {
            log.borrow_mut().push(format!("{name} = {value}"));
        });

    let log = Rc::clone(&commits);
    let age = FieldConfig::new("age")
        .with_placeholder("Age")
        .with_kind(InputKind::Number)
        .on_complete(move |name, value| {
            log.borrow_mut().push(format!("{name} = {value}"));
        });

    let values = FloatInputUi::new([name, age]).with_title("Sign up").run()?;

    println!("final values: {values}");
    for commit in commits.borrow().iter() {
        println!("committed: {commit}");
    }
    Ok(())
}
