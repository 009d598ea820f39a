//! Browser form: enter two teams and see every possible result.

use actix_web::{get, post, web, HttpResponse, Responder};
use std::fmt::Write;

use crate::config::settings;
use crate::http::calculate::run;
use crate::protocol::FormSubmission;
use crate::rating::{MatchReport, ModelKind};

/// Everything the page template needs.
struct FormView {
    form: FormSubmission,
    model: ModelKind,
    report: Option<MatchReport>,
    error: Option<String>,
}

#[get("/")]
pub async fn show_form() -> impl Responder {
    let s = settings();
    let view = FormView {
        form: FormSubmission {
            team1_point: "0".into(),
            team2_point: "0".into(),
            weight: s.default_weight.to_string(),
            ..FormSubmission::default()
        },
        model: s.default_model,
        report: None,
        error: None,
    };
    html(render(&view))
}

#[post("/")]
pub async fn submit_form(form: web::Form<FormSubmission>) -> impl Responder {
    let form = form.into_inner();
    let fallback = settings().default_model;

    // Keep the user's selection on the re-rendered form unless it was itself invalid.
    let chosen = form.model_kind(fallback);
    let selected = chosen.as_ref().copied().unwrap_or(fallback);
    let outcome = chosen.and_then(|kind| run(form.to_input(), kind).map(|report| (kind, report)));

    let view = match outcome {
        Ok((kind, report)) => FormView {
            form: FormSubmission {
                team1: report.input.team1.clone(),
                team2: report.input.team2.clone(),
                ..form
            },
            model: kind,
            report: Some(report),
            error: None,
        },
        Err(e) => FormView {
            form,
            model: selected,
            report: None,
            error: Some(format!("Input error, please enter valid values. ({e})")),
        },
    };
    html(render(&view))
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Minimal HTML escaping for text and attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render(view: &FormView) -> String {
    let f = &view.form;
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Match rating calculator</title></head>\n<body>\n<h1>Match rating calculator</h1>\n",
    );

    // Writing into a String cannot fail.
    let _ = write!(
        page,
        concat!(
            "<form method=\"post\" action=\"/\">\n",
            "<label>Team 1 <input name=\"team1\" value=\"{}\"></label>\n",
            "<label>Rating <input name=\"team1_point\" value=\"{}\"></label><br>\n",
            "<label>Team 2 <input name=\"team2\" value=\"{}\"></label>\n",
            "<label>Rating <input name=\"team2_point\" value=\"{}\"></label><br>\n",
            "<label>Weight (MWF) <input name=\"weight\" value=\"{}\"></label>\n",
            "<label>Model <select name=\"model\">\n",
        ),
        escape(&f.team1),
        escape(&f.team1_point),
        escape(&f.team2),
        escape(&f.team2_point),
        escape(&f.weight),
    );
    for kind in [ModelKind::Logistic, ModelKind::NormalCdf] {
        let selected = if kind == view.model { " selected" } else { "" };
        let _ = writeln!(page, "<option value=\"{kind}\"{selected}>{kind}</option>");
    }
    page.push_str("</select></label>\n<button type=\"submit\">Calculate</button>\n</form>\n");

    if let Some(err) = &view.error {
        let _ = writeln!(page, "<p class=\"error\">{}</p>", escape(err));
    }

    if let Some(report) = &view.report {
        let team1 = escape(&report.input.team1);
        let team2 = escape(&report.input.team2);
        let with_probability = report.results.iter().any(|r| r.probability.is_some());

        let _ = writeln!(
            page,
            "<p>Expected: {team1} {} / {team2} {}</p>",
            report.expected.team1, report.expected.team2
        );
        page.push_str("<table>\n<tr><th>Score</th>");
        if with_probability {
            page.push_str("<th>Probability</th>");
        }
        let _ = writeln!(
            page,
            "<th>{team1} &plusmn;</th><th>{team2} &plusmn;</th><th>{team1} new</th><th>{team2} new</th></tr>"
        );
        for row in &report.results {
            let _ = write!(page, "<tr><td>{}</td>", row.score);
            if let Some(p) = row.probability {
                let _ = write!(page, "<td>{p}</td>");
            }
            let _ = writeln!(
                page,
                "<td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                row.team1_delta, row.team2_delta, row.team1_new, row.team2_new
            );
        }
        page.push_str("</table>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(show_form).service(submit_form);
}
