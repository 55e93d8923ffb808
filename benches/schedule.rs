// benches/schedule.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use mlb_scrape::scrape::schedule;
use scraper::Html;

/// Synthetic season snapshot: `days` date sections, `games` paragraphs each.
fn synth_doc(days: usize, games: usize) -> String {
    let mut out = String::from("<html><body>\n");
    for d in 0..days {
        out.push_str(&format!("<div>\n<h3>August {}, 2025</h3>\n", d % 28 + 1));
        for g in 0..games {
            out.push_str(&format!(
                concat!(
                    r#"<p class="game"> <a href="/teams/CLE/2025.shtml">Guardians</a> ({a}) "#,
                    r#"@ <strong> <a href="/teams/NYM/2025.shtml">Mets</a> ({b})</strong> "#,
                    r#"&nbsp;&nbsp;<em><a href="/boxes/NYM/NYM2025.shtml">Boxscore</a></em> </p>"#,
                    "\n",
                ),
                a = g % 12,
                b = (g + 5) % 12
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</body></html>\n");
    out
}

fn bench_schedule(c: &mut Criterion) {
    let text = synth_doc(180, 15);

    c.bench_function("schedule_parse_doc", |b| {
        let doc = Html::parse_document(&text);
        b.iter(|| {
            let games = schedule::parse_doc(black_box(&doc));
            black_box(games.len())
        })
    });

    c.bench_function("schedule_full_pass", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&text));
            let games = schedule::parse_doc(&doc);
            black_box(games.len())
        })
    });
}

criterion_group!(benches, bench_schedule);
criterion_main!(benches);
