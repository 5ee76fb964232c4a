//! Collections walkthrough: declare, iterate, transform, look up, summarize.
//!
//! Each step prints a header followed by `name=value` lines on stdout.

use listkit_core::{
    as_sections, associate_by, distinct_by_title, done_titles, filter_and_sort,
    first_id_over_eager, first_id_over_lazy, group_by, sorted_by_title_ci, stats,
    synthetic_blobs, title_lengths, title_metrics, to_map, MapAccess, Todo, User,
};
use log::info;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::io::{self, Write};

const BLOB_COUNT: u32 = 1000;
const BIG_BLOB_THRESHOLD: u32 = 900;

fn main() -> Result<(), Box<dyn Error>> {
    listkit_cli::init_demo_logging("collections");
    info!("op=demo_start area=collections outcome=ok");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let todos = sample_todos();
    declare_collections(&mut out)?;
    iterate(&mut out)?;
    transform(&mut out, &todos)?;
    safe_access(&mut out)?;
    utilities(&mut out, &todos)?;
    eager_vs_lazy(&mut out)?;

    info!("op=demo_finish area=collections outcome=ok");
    Ok(())
}

fn sample_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Study Rust", true),
        Todo::new(2, "Write UI Compose", false),
        Todo::new(3, "Tests", true),
        Todo::new(4, "Study Rust", false),
    ]
}

fn titles(todos: &[Todo]) -> Vec<&str> {
    todos.iter().map(|todo| todo.title.as_str()).collect()
}

fn declare_collections(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Step 1: Declare Collections ===")?;
    let tags = ["android", "rust", "compose"];
    let mut bag = vec![1, 2, 2];
    let uniq = ["rust", "rust", "compose"]
        .into_iter()
        .collect::<BTreeSet<_>>();
    let counts = BTreeMap::from([("done", 3)]);

    writeln!(out, "tags={tags:?}")?;
    writeln!(out, "bag before={bag:?}")?;
    bag.push(2);
    writeln!(out, "bag after={bag:?}")?;
    writeln!(out, "uniq={uniq:?}")?;
    writeln!(out, "counts={counts:?}")?;
    writeln!(out)
}

fn iterate(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Step 2: Iterations ===")?;
    let tags = ["android", "rust", "compose"];
    for tag in tags {
        writeln!(out, "tag={tag}")?;
    }
    for (index, tag) in tags.iter().enumerate() {
        writeln!(out, "{index} -> {tag}")?;
    }

    let progress = BTreeMap::from([("done", 3), ("todo", 5)]);
    for (key, value) in &progress {
        writeln!(out, "{key} = {value}")?;
    }
    tags.iter().try_for_each(|tag| writeln!(out, "* {tag}"))?;
    writeln!(out)
}

fn transform(out: &mut impl Write, todos: &[Todo]) -> io::Result<()> {
    writeln!(out, "=== Step 3: Transformations ===")?;
    writeln!(out, "done_titles={:?}", done_titles(todos))?;

    let metrics = title_metrics(todos);
    writeln!(
        out,
        "done={}, chars={}, avg={:?}",
        metrics.done, metrics.chars, metrics.average
    )?;

    writeln!(out, "sorted={:?}", titles(&sorted_by_title_ci(todos)))?;
    writeln!(
        out,
        "distinct_by_title={:?}",
        titles(&distinct_by_title(todos))
    )?;

    let by_done = group_by(todos, |todo| todo.done);
    let by_id = associate_by(todos, |todo| todo.id);
    writeln!(
        out,
        "by_done keys={:?}",
        by_done.iter().map(|(done, _)| *done).collect::<Vec<_>>()
    )?;
    writeln!(out, "by_id keys={:?}", by_id.keys().collect::<Vec<_>>())?;

    let maybe_ids = [Some(1), None, Some(2)];
    let ids = maybe_ids.into_iter().flatten().collect::<Vec<i64>>();
    writeln!(out, "ids={ids:?}")?;

    writeln!(out, "kv={:?}", title_lengths(todos))?;
    writeln!(out)
}

fn safe_access(out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    writeln!(out, "=== Step 4: Map Safe Access ===")?;
    let map = BTreeMap::from([("x".to_string(), 1)]);
    let v1 = map.get_or_else("y", || 0);
    let v2 = map.get_or("y", 0);
    let v3 = *map.get_value("x")?;
    writeln!(out, "v1={v1}, v2={v2}, v3={v3}")?;
    if let Err(err) = map.get_value("y") {
        writeln!(out, "strict miss={err}")?;
    }

    let pairs = [("a", 1), ("a", 9), ("b", 2)];
    writeln!(out, "to_map={:?}", to_map(pairs))?;

    let users = vec![
        User::new(1, "Ali"),
        User::new(2, "Sara"),
        User::new(1, "Ali dup"),
    ];
    let by_user_id = associate_by(&users, |user| user.id);
    let rendered = by_user_id
        .iter()
        .map(|(id, user)| format!("{id}={user}"))
        .collect::<Vec<_>>();
    writeln!(out, "by_user_id={{{}}}", rendered.join(", "))?;
    writeln!(out)?;
    Ok(())
}

fn utilities(out: &mut impl Write, todos: &[Todo]) -> io::Result<()> {
    writeln!(out, "=== Step 5: Reusable Utilities ===")?;
    writeln!(
        out,
        "filtered={:?}",
        titles(&filter_and_sort(todos, "rust"))
    )?;

    let sections = as_sections(todos)
        .iter()
        .map(|section| format!("({}, {:?})", section.header_label(), section.titles()))
        .collect::<Vec<_>>();
    writeln!(out, "sections=[{}]", sections.join(", "))?;
    writeln!(out, "stats={}", stats(todos))?;
    writeln!(out)
}

fn eager_vs_lazy(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Step 6: Performance Bonus ===")?;
    let blobs = synthetic_blobs(BLOB_COUNT);

    let eager = first_id_over_eager(&blobs, BIG_BLOB_THRESHOLD);
    writeln!(out, "first_big_eager={}", render_id(eager))?;

    let lazy = first_id_over_lazy(&blobs, BIG_BLOB_THRESHOLD);
    writeln!(out, "first_big_lazy={}", render_id(lazy))
}

fn render_id(id: Option<u32>) -> String {
    id.map_or_else(|| "none".to_string(), |id| id.to_string())
}
