use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use career_cli::workflow::{CheckResult, SubmitOutcome};
use career_model::{Notice, NoticeKind};
use career_review::{ApplicationDetails, ApplicationStatus, ApplicationSummary, StatusCounts};

pub fn print_check_result(result: &CheckResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Complete"),
        header_cell("Errors"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for report in &result.steps {
        table.add_row(vec![
            Cell::new(report.step).add_attribute(Attribute::Bold),
            complete_cell(report.complete),
            count_cell(report.error_count()),
        ]);
    }
    println!("{table}");
    print_findings(result);
    println!("{}", readiness_line(result));
}

fn readiness_line(result: &CheckResult) -> String {
    match result.first_incomplete {
        Some(step) => format!(
            "Not ready to submit: step {} ({}) is incomplete.",
            step.number(),
            step.title()
        ),
        None => "Ready to submit.".to_string(),
    }
}

fn print_findings(result: &CheckResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Entry"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    let mut rows = 0usize;
    for report in &result.steps {
        if let Some(note) = &report.note {
            table.add_row(vec![
                Cell::new(report.step.title()),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new(note).fg(Color::Red),
            ]);
            rows += 1;
        }
        for finding in &report.findings {
            table.add_row(vec![
                Cell::new(report.step.title()),
                finding
                    .entry
                    .as_deref()
                    .map_or_else(|| dim_cell("-"), Cell::new),
                Cell::new(finding.field.label()),
                Cell::new(&finding.message).fg(Color::Red),
            ]);
            rows += 1;
        }
    }
    if rows == 0 {
        return;
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn print_submit_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Blocked {
            step,
            reason,
            errors,
        } => {
            eprintln!("Stopped at {}: {reason}", step.title());
            for (field, message) in errors.iter() {
                eprintln!("- {}: {message}", field.label());
            }
        }
        SubmitOutcome::Submitted {
            application_id,
            notices,
        } => {
            print_notices(notices);
            println!("Application ID: {application_id}");
        }
        SubmitOutcome::Failed { notices } => print_notices(notices),
    }
}

pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.kind {
            NoticeKind::Error => eprintln!("error: {}", notice.message),
            NoticeKind::Success => println!("{}", notice.message),
        }
    }
}

pub fn print_applications(rows: &[&ApplicationSummary], counts: &StatusCounts) {
    println!(
        "Total: {}  Pending: {}  Shortlisted: {}  Rejected: {}",
        counts.total, counts.pending, counts.shortlisted, counts.rejected
    );
    if rows.is_empty() {
        println!("No applications found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Position"),
        header_cell("Status"),
        header_cell("Submitted"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.id).add_attribute(Attribute::Bold),
            Cell::new(&row.name),
            Cell::new(&row.email),
            Cell::new(row.position),
            status_cell(row.status),
            Cell::new(row.submitted_at.format("%Y-%m-%d")),
        ]);
    }
    println!("{table}");
}

pub fn print_details(details: &ApplicationDetails) {
    let summary = &details.summary;
    println!("{} - {}", summary.id, summary.name);
    let mut table = Table::new();
    apply_table_style(&mut table);
    let info = &details.personal_info;
    let preferences = &details.preferences;
    let documents = &details.documents;
    let rows = [
        ("Status", summary.status.to_string()),
        ("Submitted", summary.submitted_at.to_rfc3339()),
        ("Name (Nepali)", info.name_nepali.clone()),
        ("Date of Birth", info.dob.clone()),
        ("Mobile", info.mobile.clone()),
        ("Email", info.email.clone()),
        ("Address", info.address.clone()),
        ("Position", preferences.job_position.to_string()),
        ("Expected salary", preferences.expected_salary.clone()),
        ("Preferred location", preferences.preferred_location.clone()),
        ("ID front", documents.national_id_front.clone()),
        ("ID back", documents.national_id_back.clone()),
        ("ID details", documents.national_id_details.clone()),
    ];
    for (label, value) in rows {
        table.add_row(vec![label_cell(label), Cell::new(value)]);
    }
    println!("{table}");

    if !details.educations.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Degree"),
            header_cell("Institution"),
            header_cell("Year"),
            header_cell("Grade"),
        ]);
        apply_table_style(&mut table);
        for entry in &details.educations {
            table.add_row(vec![
                &entry.degree,
                &entry.institution,
                &entry.passing_year,
                &entry.grade,
            ]);
        }
        println!("Education:");
        println!("{table}");
    }

    if !details.work_experiences.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Company"),
            header_cell("Designation"),
            header_cell("Months"),
            header_cell("Responsibilities"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        for entry in &details.work_experiences {
            table.add_row(vec![
                &entry.company_name,
                &entry.designation,
                &entry.duration_months,
                &entry.responsibilities,
            ]);
        }
        println!("Work experience:");
        println!("{table}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn complete_cell(complete: bool) -> Cell {
    if complete {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn status_cell(status: ApplicationStatus) -> Cell {
    let color = match status {
        ApplicationStatus::Pending => Color::Yellow,
        ApplicationStatus::Reviewed => Color::Blue,
        ApplicationStatus::Shortlisted => Color::Green,
        ApplicationStatus::Rejected => Color::Red,
    };
    Cell::new(status).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
