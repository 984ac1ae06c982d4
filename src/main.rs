//! Demonstration tour of the sequence views.
//!
//! Each function builds a small fixed input, applies one view or in-place
//! operation, and prints the result as one labeled line. The functions run
//! once each, in a fixed order; the program's only output channel is
//! stdout and its only failure channel is the stdout write.

use std::io;

use seqview::inplace;
use seqview::render::print_line;
use seqview::view::Viewable;

fn even_doubled() -> io::Result<()> {
    let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let view = numbers
        .into_iter()
        .filter_view(|n| n % 2 == 0)
        .transform_view(|n| n * 2);
    print_line("Even doubled numbers", view)
}

fn reversed() -> io::Result<()> {
    let numbers = vec![1, 2, 3, 4, 5];
    print_line("Reversed numbers", numbers.into_iter().reverse_view())
}

fn first_three() -> io::Result<()> {
    let numbers = vec![1, 2, 3, 4, 5];
    print_line("First three numbers", numbers.into_iter().take_view(3))
}

fn dropped_two() -> io::Result<()> {
    let numbers = vec![1, 2, 3, 4, 5];
    print_line(
        "After dropping first two numbers",
        numbers.into_iter().drop_view(2),
    )
}

fn concatenated() -> io::Result<()> {
    let nested = vec![vec![1, 2, 3], vec![4, 5, 6]];
    print_line("Concatenated numbers", nested.into_iter().concat_view())
}

fn unique() -> io::Result<()> {
    let mut numbers = vec![1, 2, 2, 3, 4, 4, 5];
    inplace::dedup_consecutive(&mut numbers);
    print_line("Unique numbers", numbers)
}

fn sorted() -> io::Result<()> {
    let mut numbers = vec![5, 3, 1, 4, 2];
    inplace::sort(&mut numbers);
    print_line("Sorted numbers", numbers)
}

fn squared() -> io::Result<()> {
    let numbers = vec![1, 2, 3, 4, 5];
    print_line("Squared numbers", numbers.into_iter().transform_view(|n| n * n))
}

fn evens() -> io::Result<()> {
    let numbers = vec![1, 2, 3, 4, 5];
    print_line("Even numbers", numbers.into_iter().filter_view(|n| n % 2 == 0))
}

fn zipped() -> io::Result<()> {
    let first = vec![1, 2, 3];
    let second = vec![4, 5, 6];
    let pairs = first
        .into_iter()
        .zip_with_view(second, |a, b| format!("({a}, {b})"));
    print_line("Zipped pairs", pairs)
}

fn taken_while() -> io::Result<()> {
    let numbers = vec![1, 2, 3, 4, 5];
    print_line(
        "Taken while less than 4",
        numbers.into_iter().take_while_view(|n| *n < 4),
    )
}

fn dropped_while() -> io::Result<()> {
    let numbers = vec![1, 2, 3, 4, 5];
    print_line(
        "Dropped while less than 3",
        numbers.into_iter().drop_while_view(|n| *n < 3),
    )
}

fn main() -> io::Result<()> {
    even_doubled()?;
    reversed()?;
    first_three()?;
    dropped_two()?;
    concatenated()?;
    unique()?;
    sorted()?;
    squared()?;
    evens()?;
    zipped()?;
    taken_while()?;
    dropped_while()?;
    Ok(())
}
