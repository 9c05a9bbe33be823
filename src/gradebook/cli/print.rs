use colored::Colorize;
use gradebook::api::{CmdMessage, MessageLevel};
use gradebook::error::GradebookError;
use gradebook::index::IndexedStudent;
use gradebook::model::Statistics;

const RULE_WIDTH: usize = 60;
const NO_GRADES: &str = "No grades yet";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("\n{}", message.content),
            MessageLevel::Success => println!("\n{}", message.content.green()),
            MessageLevel::Warning => println!("\n{}", message.content.yellow()),
            MessageLevel::Error => println!("\n{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(error: &GradebookError) {
    print_messages(&[CmdMessage::error(error.to_string())]);
}

pub(super) fn print_info(content: &str) {
    print_messages(&[CmdMessage::info(content)]);
}

pub(super) fn print_students(students: &[IndexedStudent]) {
    print!("{}", render_student_list(students));
}

pub(super) fn print_statistics(stats: &Statistics) {
    print!("{}", render_statistics(stats));
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn render_student_list(students: &[IndexedStudent]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\nSTUDENT LIST\n{}\n", rule(), rule()));
    for entry in students {
        output.push_str(&render_student(entry));
    }
    output.push_str(&format!("{}\n", rule()));
    output
}

fn render_student(entry: &IndexedStudent) -> String {
    let student = &entry.student;
    let average = if student.has_grades() {
        format!("{:.2}", student.average())
    } else {
        NO_GRADES.to_string()
    };
    format!(
        "\n{}. {}\n   Email: {}\n   Grades: {:?}\n   Average: {}\n",
        entry.index,
        student.name,
        student.email,
        student.grades(),
        average
    )
}

fn render_statistics(stats: &Statistics) -> String {
    let unique: Vec<u8> = stats.unique_grades.iter().copied().collect();
    let mut output = String::new();
    output.push_str(&format!("\n{}\nSTATISTICS\n{}\n", rule(), rule()));
    output.push_str(&format!("Total students: {}\n", stats.total_students));
    output.push_str(&format!("Total grades recorded: {}\n", stats.total_grades));
    output.push_str(&format!("Unique grades: {}\n", stats.unique_count()));
    output.push_str(&format!("All unique grades: {:?}\n", unique));
    output.push_str(&format!(
        "Grades above {}: {}\n",
        stats.honors_threshold, stats.grades_above_threshold
    ));
    output.push_str(&format!("Overall average: {:.2}\n", stats.overall_average));
    output.push_str(&format!("{}\n", rule()));
    output
}
