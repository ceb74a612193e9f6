//! The fixed demonstration sequences run by the `nodechain` binary.
//!
//! Each routine writes to any `embedded_io` sink so the exact output can be
//! checked without touching the process's standard output.

use crate::collections::{LinkedNode, SinglyLinkedList};
use crate::error::DemoError;
use crate::printing::{flush, write_line, write_nodes};

use embedded_io::Write;
use log::info;

const HEAD_VALUES: [i32; 3] = [7, 5, 3];
const TAIL_VALUES: [i32; 3] = [10, 12, 14];

/// Wires three nodes by hand, 5 -> 6 -> 7, and prints the chain.
pub fn creating_and_printing<W: Write>(sink: &mut W) -> Result<(), DemoError> {
    let c = LinkedNode::new(7);
    let b = LinkedNode::with_next(6, &c);
    let a = LinkedNode::with_next(5, &b);

    write_nodes(sink, a.traverse())?;
    Ok(())
}

/// Inserts 7, 5, 3 at the head and 10, 12, 14 at the tail, then prints.
pub fn insertion<W: Write>(sink: &mut W) -> Result<(), DemoError> {
    let mut list = SinglyLinkedList::new();
    for value in HEAD_VALUES {
        list.insert_at_head(value)?;
    }
    for value in TAIL_VALUES {
        list.insert_at_tail(value)?;
    }

    write_nodes(sink, list.traverse())?;
    Ok(())
}

/// Inserts 7, 5, 3 at the head, then deletes the head and the tail, printing
/// the list after every step.
pub fn deletion<W: Write>(sink: &mut W) -> Result<(), DemoError> {
    let mut list = SinglyLinkedList::new();
    for value in HEAD_VALUES {
        list.insert_at_head(value)?;
    }

    write_line(sink, "Before Delete:")?;
    write_nodes(sink, list.traverse())?;

    list.delete_at_head();
    write_line(sink, "")?;
    write_line(sink, "After Deleting head:")?;
    write_nodes(sink, list.traverse())?;

    list.delete_at_tail();
    write_line(sink, "")?;
    write_line(sink, "After Deleting tail:")?;
    write_nodes(sink, list.traverse())?;

    Ok(())
}

/// Runs every demonstration in order, separated by blank lines.
pub fn run_all<W: Write>(sink: &mut W) -> Result<(), DemoError> {
    info!("running creation demo");
    creating_and_printing(sink)?;

    write_line(sink, "")?;
    info!("running insertion demo");
    insertion(sink)?;

    write_line(sink, "")?;
    info!("running deletion demo");
    deletion(sink)?;

    flush(sink)?;
    Ok(())
}
