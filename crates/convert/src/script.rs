//! Script translation from Postman's `pm.*` and `postman.*` APIs to Bruno's.

use std::sync::LazyLock;

use regex::Regex;

/// Ordered rewrite table.
///
/// Order matters: a longer pattern listed after a prefix of itself never
/// fires, because the prefix rule has already rewritten the text. For every
/// pattern starting with `pm\.` a `postman\.` twin is registered right
/// after it.
const BASE_RULES: [(&str, &str); 57] = [
    (r"pm\.environment\.get\(", "bru.getEnvVar("),
    (r"pm\.environment\.set\(", "bru.setEnvVar("),
    (r"pm\.variables\.get\(", "bru.getVar("),
    (r"pm\.variables\.set\(", "bru.setVar("),
    (r"pm\.variables\.replaceIn\(", "bru.interpolate("),
    (r"pm\.collectionVariables\.get\(", "bru.getVar("),
    (r"pm\.collectionVariables\.set\(", "bru.setVar("),
    (r"pm\.collectionVariables\.has\(", "bru.hasVar("),
    (r"pm\.collectionVariables\.unset\(", "bru.deleteVar("),
    (r"pm\.setNextRequest\(", "bru.setNextRequest("),
    (r"pm\.test\(", "test("),
    (r"pm.response.to.have\.status\(", "expect(res.getStatus()).to.equal("),
    (r"pm\.response\.to\.have\.status\(", "expect(res.getStatus()).to.equal("),
    (r"pm\.response\.json\(", "res.getBody("),
    (r"pm\.expect\(", "expect("),
    (
        r"pm\.environment\.has\(([^)]+)\)",
        "bru.getEnvVar($1) !== undefined && bru.getEnvVar($1) !== null",
    ),
    (r"pm\.response\.code", "res.getStatus()"),
    (r"pm\.response\.text\(\)", "JSON.stringify(res.getBody())"),
    (r"pm\.expect\.fail\(", "expect.fail("),
    (r"pm\.response\.responseTime", "res.getResponseTime()"),
    (r"pm\.globals\.set\(", "bru.setGlobalEnvVar("),
    (r"pm\.globals\.get\(", "bru.getGlobalEnvVar("),
    (r"pm\.response\.headers\.get\(", "res.getHeader("),
    (r"pm\.response\.to\.have\.body\(", "expect(res.getBody()).to.equal("),
    (
        r"pm\.response\.to\.have\.header\(",
        "expect(res.getHeaders()).to.have.property(",
    ),
    (r"pm\.response\.size\(\)", "res.getSize()"),
    (r"pm\.response\.size\(\)\.body", "res.getSize().body"),
    (r"pm\.response\.responseSize", "res.getSize().body"),
    (r"pm\.response\.size\(\)\.header", "res.getSize().header"),
    (r"pm\.response\.size\(\)\.total", "res.getSize().total"),
    (r"pm\.environment\.name", "bru.getEnvName()"),
    (r"pm\.response\.status", "res.statusText"),
    (r"pm\.response\.headers", "res.getHeaders()"),
    (
        r"tests\['([^']+)'\]\s*=\s*([^;]+);",
        r#"test("$1", function() { expect(Boolean($2)).to.be.true; });"#,
    ),
    (r"pm\.request\.url", "req.getUrl()"),
    (r"pm\.request\.method", "req.getMethod()"),
    (r"pm\.request\.headers", "req.getHeaders()"),
    (r"pm\.request\.body", "req.getBody()"),
    (r"pm\.info\.requestName", "req.getName()"),
    (r"request\.url", "req.getUrl()"),
    (r"request\.method", "req.getMethod()"),
    (r"request\.headers", "req.getHeaders()"),
    (r"request\.body", "req.getBody()"),
    (r"request\.name", "req.getName()"),
    (r"postman\.setEnvironmentVariable\(", "bru.setEnvVar("),
    (r"postman\.getEnvironmentVariable\(", "bru.getEnvVar("),
    (r"postman\.clearEnvironmentVariable\(", "bru.deleteEnvVar("),
    (r"pm\.execution\.skipRequest\(\)", "bru.runner.skipRequest()"),
    (r"pm\.execution\.skipRequest", "bru.runner.skipRequest"),
    (r"pm\.execution\.setNextRequest\(null\)", "bru.runner.stopExecution()"),
    (
        r"pm\.execution\.setNextRequest\('null'\)",
        "bru.runner.stopExecution()",
    ),
    (r"pm\.cookies\.jar\(\)", "bru.cookies.jar()"),
    (r"pm\.cookies\.jar\(\)\.get\(", "bru.cookies.jar().getCookie("),
    (r"pm\.cookies\.jar\(\)\.set\(", "bru.cookies.jar().setCookie("),
    (r"pm\.cookies\.jar\(\)\.unset\(", "bru.cookies.jar().deleteCookie("),
    (r"pm\.cookies\.jar\(\)\.clear\(", "bru.cookies.jar().deleteCookies("),
    (r"pm\.cookies\.jar\(\)\.getAll\(", "bru.cookies.jar().getCookies("),
];

#[allow(clippy::expect_used)]
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    let mut rules = Vec::with_capacity(BASE_RULES.len() * 2);
    for (pattern, replacement) in BASE_RULES {
        rules.push((Regex::new(pattern).expect("valid regex"), replacement));
        if let Some(rest) = pattern.strip_prefix(r"pm\.") {
            let twin = format!(r"postman\.{rest}");
            rules.push((Regex::new(&twin).expect("valid regex"), replacement));
        }
    }
    rules
});

#[allow(clippy::expect_used)]
static UNTRANSLATED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(.*(pm\.|postman\.).*)$").expect("valid regex"));

/// Rewrites Postman script calls to their Bruno equivalents.
///
/// Rules apply in table order; any line still mentioning `pm.` or
/// `postman.` afterwards is commented out with `// `. Text without Postman
/// calls passes through unchanged.
#[must_use]
pub fn translate(code: &str) -> String {
    let mut translated = code.to_string();
    for (regex, replacement) in RULES.iter() {
        if regex.is_match(&translated) {
            translated = regex.replace_all(&translated, *replacement).into_owned();
        }
    }
    if translated.contains("pm.") || translated.contains("postman.") {
        translated = UNTRANSLATED_LINE
            .replace_all(&translated, "// $1")
            .into_owned();
    }
    translated
}
