//! Interactive menu session
//!
//! This module drives the whole program:
//! - [`Session`]: owns the token reader, output stream and theme, and runs
//!   the 16-option main menu plus the matrix submenu
//! - [`input`]: token reading and typed integer validation
//! - [`theme`]: styled vs plain output
//! - [`demos`]: the three standalone arithmetic demos
//!
//! # Session shape
//!
//! On start the session reads the subject count (1..=6) and builds the
//! record store; from then on it loops: print menu, read a choice, run the
//! operation, report.  Invalid tokens are re-prompted in place.  No failure
//! is fatal: every error path prints and returns to the menu, so the only
//! way `run` returns `Err` is a real I/O failure, including input ending
//! before the exit option is chosen.
//!
//! The streams are generic (`BufRead` in, `Write` out), so a full session
//! can be scripted from a string and its output captured in tests.

pub mod demos;
pub mod input;
pub mod theme;

use crate::arrays::dedup_merge;
use crate::matrix::Matrix;
use crate::records::record::StudentRecord;
use crate::records::store::{MergeOutcome, RecordStore};
use crate::records::{MAX_SUBJECTS, STORE_CAPACITY};
use self::input::{parse_int_in_range, TokenReader};
use self::theme::Theme;
use std::io::{self, BufRead, Write};

/// Largest roll number accepted at the prompt
const MAX_ROLL: i64 = 1_000_000;
/// Magnitude bound on demo, array and matrix integers
const MAX_INT: i64 = 1_000_000;
/// Longest integer array the dedup merge reads
const MAX_ARRAY_LEN: i64 = 200;
/// Largest incoming section for a merge
const MAX_SECTION: i64 = 100;
/// Largest matrix dimension the submenu accepts
const MAX_MATRIX_DIM: i64 = 6;
/// Upper bound of the Armstrong enumeration
const ARMSTRONG_LIMIT: u32 = 10_000;

/// One interactive session over a pair of streams
pub struct Session<R: BufRead, W: Write> {
    tokens: TokenReader<R>,
    out: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Session {
            tokens: TokenReader::new(input),
            out: output,
            theme,
        }
    }

    /// Run a full session until the exit option is chosen
    pub fn run(&mut self) -> io::Result<()> {
        let subjects = self.prompt_int(
            "Enter number of subjects (1..6): ",
            1,
            MAX_SUBJECTS as i64,
        )? as usize;
        let mut store = RecordStore::new(STORE_CAPACITY, subjects);

        loop {
            self.print_menu()?;
            let choice = self.prompt_int("Enter choice: ", 1, 16)?;
            match choice {
                1 => self.add_students(&mut store)?,
                2 => self.display_all(&store)?,
                3 => self.update_marks(&mut store)?,
                4 => self.delete_student(&mut store)?,
                5 => self.search_by_name(&store)?,
                6 => self.performance_report(&store)?,
                7 => self.sort_by_average(&mut store)?,
                8 => self.sort_by_name(&mut store)?,
                9 => self.top_performers(&store)?,
                10 => self.merge_section(&mut store)?,
                11 => self.merge_integer_arrays()?,
                12 => self.swap_demo()?,
                13 => self.bitwise_demo()?,
                14 => self.armstrong_demo()?,
                15 => self.matrix_menu()?,
                _ => {
                    writeln!(self.out, "Exiting program.")?;
                    return Ok(());
                }
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.theme.heading("Main Menu"))?;
        writeln!(self.out, "1. Add Students")?;
        writeln!(self.out, "2. Display All Students")?;
        writeln!(self.out, "3. Update Student Marks (by roll)")?;
        writeln!(self.out, "4. Delete Student (by number)")?;
        writeln!(self.out, "5. Search by Partial Name")?;
        writeln!(self.out, "6. Performance Report")?;
        writeln!(self.out, "7. Sort by Average (desc)")?;
        writeln!(self.out, "8. Sort by Name (asc)")?;
        writeln!(self.out, "9. Show Top K Performers")?;
        writeln!(self.out, "10. Merge Another Section")?;
        writeln!(self.out, "11. Merge Integer Arrays (exclude duplicates)")?;
        writeln!(self.out, "12. Swap Without Third Variable Demo")?;
        writeln!(self.out, "13. Bitwise AND/OR/XOR Demo")?;
        writeln!(self.out, "14. Armstrong Numbers 1..10000")?;
        writeln!(self.out, "15. Matrix Operations")?;
        writeln!(self.out, "16. Exit")?;
        Ok(())
    }

    // --- prompting ---

    /// Next token, or an `UnexpectedEof` error if input ran dry
    fn next_token(&mut self) -> io::Result<String> {
        self.tokens.next_token()?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input ended mid-session")
        })
    }

    /// Prompt for an integer in `min..=max`, re-prompting in place until a
    /// valid one arrives
    fn prompt_int(&mut self, prompt: &str, min: i64, max: i64) -> io::Result<i64> {
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
            let token = self.next_token()?;
            match parse_int_in_range(&token, min, max) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    let msg = format!("Invalid input: {}. Try again.", e);
                    writeln!(self.out, "{}", self.theme.error(&msg))?;
                }
            }
        }
    }

    /// Prompt for a single whitespace-free token
    fn prompt_name(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.next_token()
    }

    fn read_marks(&mut self, subjects: usize) -> io::Result<Vec<u8>> {
        let mut marks = Vec::with_capacity(subjects);
        for j in 1..=subjects {
            let prompt = format!("Enter marks for subject {} (0-100): ", j);
            marks.push(self.prompt_int(&prompt, 0, 100)? as u8);
        }
        Ok(marks)
    }

    fn read_record(&mut self, subjects: usize) -> io::Result<StudentRecord> {
        let roll = self.prompt_int("Enter roll number: ", 1, MAX_ROLL)? as u32;
        let name = self.prompt_name("Enter name (no spaces): ")?;
        let attendance = self.prompt_int("Enter attendance (0-100): ", 0, 100)? as u8;
        let marks = self.read_marks(subjects)?;
        Ok(StudentRecord::new(roll, name, marks, attendance))
    }

    // --- record store operations ---

    fn add_students(&mut self, store: &mut RecordStore) -> io::Result<()> {
        if store.is_full() {
            let msg = self.theme.error("Student database is full.");
            writeln!(self.out, "{}", msg)?;
            return Ok(());
        }
        let n = self.prompt_int(
            "How many students to add? ",
            1,
            store.remaining_capacity() as i64,
        )?;
        for _ in 0..n {
            let record = self.read_record(store.subject_count())?;
            match store.push(record) {
                Ok(()) => {
                    let msg = format!("Student added. Total students: {}", store.len());
                    writeln!(self.out, "{}", self.theme.success(&msg))?;
                }
                Err(e) => writeln!(self.out, "{}", self.theme.error(&e.to_string()))?,
            }
        }
        Ok(())
    }

    fn display_all(&mut self, store: &RecordStore) -> io::Result<()> {
        if store.is_empty() {
            writeln!(self.out, "No student records.")?;
            return Ok(());
        }
        let mut header = format!("{:<3} {:<6} {:<10}", "No", "Roll", "Name");
        for j in 1..=store.subject_count() {
            header.push_str(&format!(" S{:<2}", j));
        }
        header.push_str("  Att");
        writeln!(self.out, "{}", self.theme.heading(&header))?;
        for (i, r) in store.records().iter().enumerate() {
            write!(self.out, "{:<3} {:<6} {:<10}", i + 1, r.roll, r.name)?;
            for &m in &r.marks {
                write!(self.out, " {:<3}", m)?;
            }
            writeln!(self.out, "  {:>3}", r.attendance)?;
        }
        Ok(())
    }

    fn update_marks(&mut self, store: &mut RecordStore) -> io::Result<()> {
        let roll = self.prompt_int("Enter roll to update: ", 1, MAX_ROLL)? as u32;
        if store.find_by_roll(roll).is_none() {
            let msg = format!("Student with roll {} not found.", roll);
            writeln!(self.out, "{}", self.theme.error(&msg))?;
            return Ok(());
        }
        let marks = self.read_marks(store.subject_count())?;
        match store.update_marks(roll, marks) {
            Ok(()) => {
                let msg = format!("Marks updated for roll {}.", roll);
                writeln!(self.out, "{}", self.theme.success(&msg))?;
            }
            Err(e) => writeln!(self.out, "{}", self.theme.error(&e.to_string()))?,
        }
        Ok(())
    }

    fn delete_student(&mut self, store: &mut RecordStore) -> io::Result<()> {
        if store.is_empty() {
            writeln!(self.out, "No students to delete.")?;
            return Ok(());
        }
        let num = self.prompt_int(
            "Enter student number to delete (1..): ",
            1,
            store.len() as i64,
        )?;
        match store.remove(num as usize - 1) {
            Ok(_) => {
                let msg = format!("Deleted student number {}.", num);
                writeln!(self.out, "{}", self.theme.success(&msg))?;
            }
            Err(e) => writeln!(self.out, "{}", self.theme.error(&e.to_string()))?,
        }
        Ok(())
    }

    fn search_by_name(&mut self, store: &RecordStore) -> io::Result<()> {
        let query = self.prompt_name("Enter partial name (case-sensitive): ")?;
        let hits = store.search_by_name(&query);
        if hits.is_empty() {
            writeln!(self.out, "No match found.")?;
            return Ok(());
        }
        for (index, record) in hits {
            writeln!(
                self.out,
                "Found student {}: Roll={} Name={}",
                index + 1,
                record.roll,
                record.name
            )?;
        }
        Ok(())
    }

    fn performance_report(&mut self, store: &RecordStore) -> io::Result<()> {
        if store.is_empty() {
            writeln!(self.out, "No records.")?;
            return Ok(());
        }
        let header = format!(
            "{:<3} {:<6} {:<10} {:<5} {:<6} {:<5}",
            "No", "Roll", "Name", "Total", "Avg", "Grade"
        );
        writeln!(self.out, "{}", self.theme.heading(&header))?;
        for (i, r) in store.records().iter().enumerate() {
            writeln!(
                self.out,
                "{:<3} {:<6} {:<10} {:<5} {:<6.2} {:<5}",
                i + 1,
                r.roll,
                r.name,
                r.total(),
                r.average(),
                r.grade()
            )?;
        }
        Ok(())
    }

    fn sort_by_average(&mut self, store: &mut RecordStore) -> io::Result<()> {
        if store.len() < 2 {
            writeln!(self.out, "Not enough records to sort.")?;
            return Ok(());
        }
        store.sort_by_average_desc();
        let msg = self.theme.success("Sorted by average (descending).");
        writeln!(self.out, "{}", msg)?;
        Ok(())
    }

    fn sort_by_name(&mut self, store: &mut RecordStore) -> io::Result<()> {
        if store.len() < 2 {
            writeln!(self.out, "Not enough records to sort.")?;
            return Ok(());
        }
        store.sort_by_name_asc();
        let msg = self.theme.success("Sorted by name (A-Z).");
        writeln!(self.out, "{}", msg)?;
        Ok(())
    }

    fn top_performers(&mut self, store: &RecordStore) -> io::Result<()> {
        if store.is_empty() {
            writeln!(self.out, "No students.")?;
            return Ok(());
        }
        let k = self.prompt_int("Enter K (top K): ", 1, store.len() as i64)? as usize;
        writeln!(self.out, "Top {} performers:", k)?;
        for entry in store.top_k(k) {
            writeln!(
                self.out,
                "{}) Roll={} Name={} Total={} Avg={:.2}",
                entry.rank, entry.roll, entry.name, entry.total, entry.average
            )?;
        }
        Ok(())
    }

    fn merge_section(&mut self, store: &mut RecordStore) -> io::Result<()> {
        let m = self.prompt_int(
            "Enter number of students in other section: ",
            1,
            MAX_SECTION,
        )? as usize;
        if m > store.remaining_capacity() {
            let msg = format!(
                "Not enough space; can add at most {} students.",
                store.remaining_capacity()
            );
            writeln!(self.out, "{}", self.theme.error(&msg))?;
        }
        // every candidate is read in full, even those the merge will drop
        let mut candidates = Vec::with_capacity(m);
        for _ in 0..m {
            candidates.push(self.read_record(store.subject_count())?);
        }
        let report = store.merge(candidates);
        for entry in &report.entries {
            match entry.outcome {
                MergeOutcome::Added => {
                    let msg = format!("Added {} (roll {}).", entry.name, entry.roll);
                    writeln!(self.out, "{}", self.theme.success(&msg))?;
                }
                MergeOutcome::RejectedDuplicateRoll => {
                    let msg = format!("Duplicate roll {}. Skipping {}.", entry.roll, entry.name);
                    writeln!(self.out, "{}", self.theme.error(&msg))?;
                }
                MergeOutcome::RejectedDuplicateName => {
                    let msg = format!("Duplicate name {}. Skipping roll {}.", entry.name, entry.roll);
                    writeln!(self.out, "{}", self.theme.error(&msg))?;
                }
                MergeOutcome::SkippedCapacity => {
                    let msg = format!("No space left. Dropping {} (roll {}).", entry.name, entry.roll);
                    writeln!(self.out, "{}", self.theme.error(&msg))?;
                }
            }
        }
        writeln!(self.out, "Merge complete. Total students: {}", store.len())?;
        Ok(())
    }

    // --- array and matrix utilities ---

    fn read_int_array(&mut self, ordinal: &str, var: &str) -> io::Result<Vec<i32>> {
        let n = self.prompt_int(
            &format!("Enter size of {} array: ", ordinal),
            0,
            MAX_ARRAY_LEN,
        )? as usize;
        let mut values = Vec::with_capacity(n);
        for i in 0..n {
            let prompt = format!("{}[{}]: ", var, i);
            values.push(self.prompt_int(&prompt, -MAX_INT, MAX_INT)? as i32);
        }
        Ok(values)
    }

    fn merge_integer_arrays(&mut self) -> io::Result<()> {
        let a = self.read_int_array("first", "a")?;
        let b = self.read_int_array("second", "b")?;
        let merged = dedup_merge(&a, &b);
        writeln!(
            self.out,
            "Merged array excluding duplicates (size={}):",
            merged.len()
        )?;
        let line = merged
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn read_matrix(&mut self, name: &str, rows: usize, cols: usize) -> io::Result<Matrix> {
        let mut matrix = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let prompt = format!("{}[{}][{}]: ", name, i, j);
                let value = self.prompt_int(&prompt, -MAX_INT, MAX_INT)?;
                matrix.set(i, j, value);
            }
        }
        Ok(matrix)
    }

    fn matrix_menu(&mut self) -> io::Result<()> {
        let choice = self.prompt_int(
            "Matrix Menu: 1:Add 2:Sub 3:Mul 4:Transpose 5:Back. Enter: ",
            1,
            5,
        )?;
        match choice {
            1 | 2 | 3 => {
                let r1 = self.prompt_int("Rows of A: ", 1, MAX_MATRIX_DIM)? as usize;
                let c1 = self.prompt_int("Cols of A: ", 1, MAX_MATRIX_DIM)? as usize;
                let r2 = self.prompt_int("Rows of B: ", 1, MAX_MATRIX_DIM)? as usize;
                let c2 = self.prompt_int("Cols of B: ", 1, MAX_MATRIX_DIM)? as usize;
                // shape check before any element is read
                if (choice == 1 || choice == 2) && (r1 != r2 || c1 != c2) {
                    let msg = self.theme.error("For add/sub, dimensions must match.");
                    writeln!(self.out, "{}", msg)?;
                    return Ok(());
                }
                if choice == 3 && c1 != r2 {
                    let msg = self
                        .theme
                        .error("For multiplication, cols of A must equal rows of B.");
                    writeln!(self.out, "{}", msg)?;
                    return Ok(());
                }
                let a = self.read_matrix("A", r1, c1)?;
                let b = self.read_matrix("B", r2, c2)?;
                let (label, result) = match choice {
                    1 => ("A + B", a.add(&b)),
                    2 => ("A - B", a.sub(&b)),
                    _ => ("A x B", a.mul(&b)),
                };
                match result {
                    Ok(matrix) => {
                        writeln!(self.out, "Result ({}):", label)?;
                        write!(self.out, "{}", matrix)?;
                    }
                    Err(e) => writeln!(self.out, "{}", self.theme.error(&e.to_string()))?,
                }
            }
            4 => {
                let rows = self.prompt_int("Rows: ", 1, MAX_MATRIX_DIM)? as usize;
                let cols = self.prompt_int("Cols: ", 1, MAX_MATRIX_DIM)? as usize;
                let a = self.read_matrix("A", rows, cols)?;
                writeln!(self.out, "Transpose:")?;
                write!(self.out, "{}", a.transpose())?;
            }
            _ => {} // back
        }
        Ok(())
    }

    // --- demos ---

    fn swap_demo(&mut self) -> io::Result<()> {
        let a = self.prompt_int("Enter a: ", -MAX_INT, MAX_INT)? as i32;
        let b = self.prompt_int("Enter b: ", -MAX_INT, MAX_INT)? as i32;
        writeln!(self.out, "Before swap: a={} b={}", a, b)?;
        let (a, b) = demos::swap_without_temp(a, b);
        writeln!(self.out, "After swap: a={} b={}", a, b)?;
        Ok(())
    }

    fn bitwise_demo(&mut self) -> io::Result<()> {
        let x = self.prompt_int("Enter first integer: ", -MAX_INT, MAX_INT)? as i32;
        let y = self.prompt_int("Enter second integer: ", -MAX_INT, MAX_INT)? as i32;
        let ops = demos::bitwise_ops(x, y);
        writeln!(self.out, "AND = {}, OR = {}, XOR = {}", ops.and, ops.or, ops.xor)?;
        writeln!(self.out, "Smallest among AND/OR/XOR is {}", ops.smallest())?;
        Ok(())
    }

    fn armstrong_demo(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Armstrong numbers from 1 to {}:",
            ARMSTRONG_LIMIT
        )?;
        let line = demos::armstrong_numbers(ARMSTRONG_LIMIT)
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}
