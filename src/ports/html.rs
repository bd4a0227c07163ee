// src/ports/html.rs
use crate::domain::Question;
use html_escape::{decode_html_entities, encode_text};
use regex::Regex;
use std::sync::LazyLock;
use tracing::instrument;

static LATEX_CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<pre><code[^>]*>(?s)\s*((?:\$\$.*?\$\$)|(?:\$.*?\$))\s*</code></pre>")
        .expect("valid latex code block pattern")
});

const MATH_DELIMITERS: [&str; 3] = ["$", "\\(", "\\["];

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Decode entities and unwrap LaTeX that was pasted as a code block.
    #[instrument(level = "trace", ret)]
    fn process_content(&self, content: &str) -> String {
        let decoded = decode_html_entities(content);

        LATEX_CODE_BLOCK
            .replace_all(&decoded, |caps: &regex::Captures| {
                caps.get(1).map_or("", |m| m.as_str().trim()).to_string()
            })
            .into_owned()
    }

    /// Description as MathJax input. Plain descriptions are typeset as one
    /// inline formula; text that already carries delimiters is left as is.
    fn math_description(&self, description: &str) -> String {
        let processed = self.process_content(description);
        let escaped = encode_text(&processed);
        if MATH_DELIMITERS.iter().any(|d| processed.contains(d)) {
            escaped.into_owned()
        } else {
            format!(r"\({}\)", escaped)
        }
    }

    pub fn render(&self, question: &Question) -> String {
        let description = self.math_description(&question.question_description);
        let answer = self.process_content(&question.solution_file);
        let tags = if question.skill_tags.is_empty() {
            "No tags".to_string()
        } else {
            question
                .skill_tags
                .iter()
                .map(|t| format!(r#"<span class="tag">{}</span>"#, encode_text(t)))
                .collect::<Vec<_>>()
                .join("")
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Question {id}</title>
    <script>
        window.MathJax = {{
            tex: {{
                inlineMath: [['\\(', '\\)'], ['$', '$']],
                displayMath: [['$$', '$$'], ['\\[', '\\]']],
                processEscapes: true
            }}
        }};
    </script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/mathjax/3.2.2/es5/tex-mml-chtml.js"></script>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .question {{
            background: white;
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .description {{
            margin: 1rem 0 2rem;
            padding-bottom: 1rem;
            border-bottom: 2px solid #eee;
        }}
        .meta {{
            font-size: 0.9em;
            color: #666;
        }}
        .tag {{
            display: inline-block;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            margin-right: 4px;
            font-size: 0.8em;
        }}
    </style>
</head>
<body>
    <div class="question">
        <h2>{title}</h2>
        <div class="description">{description}</div>
        <div class="answer">
            <h3>{answer_type}</h3>
            <div>{answer}</div>
        </div>
        <div class="meta">
            <div>{course} / {standard} / {lesson}</div>
            <div>Difficulty: {difficulty} | Type: {question_type} | Status: {status}</div>
            <div class="tags">{tags}</div>
        </div>
    </div>
</body>
</html>"#,
            id = question.question_id,
            title = encode_text(&question.question_title),
            description = description,
            answer_type = encode_text(if question.answer_type.is_empty() {
                "Answer"
            } else {
                question.answer_type.as_str()
            }),
            answer = encode_text(&answer),
            course = encode_text(&question.course_title),
            standard = encode_text(&question.standard_title),
            lesson = encode_text(&question.lesson_title),
            difficulty = encode_text(&question.difficulty_level),
            question_type = encode_text(&question.question_type),
            status = encode_text(&question.status),
            tags = tags,
        )
    }
}
