//! Built-in vocabulary tables.
//!
//! Each table is an ordered list of canonical values with the raw phrases
//! that map to them. New vocabulary is an addition here (or an `extra_*`
//! entry in [`InterpreterConfig`](crate::InterpreterConfig)), never a code
//! change in the interpreter.

use crate::vocabulary::VocabEntry;

/// Skill phrases mapped to canonical skill names.
#[must_use]
pub fn skills() -> Vec<VocabEntry> {
    vec![
        VocabEntry::phrases("python", &["python", "py"]),
        VocabEntry::phrases("java", &["java", "core java", "j2ee"]),
        VocabEntry::phrases("javascript", &["javascript", "js", "ecmascript"]),
        VocabEntry::phrases("typescript", &["typescript", "ts"]),
        VocabEntry::phrases("react", &["react", "reactjs", "react.js"]),
        VocabEntry::phrases("angular", &["angular", "angularjs"]),
        VocabEntry::phrases("vue", &["vue", "vuejs", "vue.js"]),
        VocabEntry::phrases("nodejs", &["nodejs", "node.js", "node"]),
        VocabEntry::phrases("spring", &["spring boot", "springboot", "spring"]),
        VocabEntry::phrases("django", &["django"]),
        VocabEntry::phrases("flask", &["flask"]),
        VocabEntry::phrases("sql", &["sql"]),
        VocabEntry::phrases("mysql", &["mysql"]),
        VocabEntry::phrases("postgresql", &["postgresql", "postgres"]),
        VocabEntry::phrases("mongodb", &["mongodb", "mongo"]),
        VocabEntry::phrases("c++", &["c++", "cpp"]),
        VocabEntry::phrases("c#", &["c#", "csharp"]),
        VocabEntry::phrases("golang", &["golang"]),
        VocabEntry::phrases("rust", &["rust"]),
        VocabEntry::phrases("html", &["html", "html5"]),
        VocabEntry::phrases("css", &["css", "css3"]),
        VocabEntry::phrases("docker", &["docker"]),
        VocabEntry::phrases("kubernetes", &["kubernetes", "k8s"]),
        VocabEntry::phrases("aws", &["aws"]),
        VocabEntry::phrases("azure", &["azure"]),
        VocabEntry::phrases("microservices", &["microservices", "microservice"]),
        VocabEntry::phrases("machine learning", &["machine learning", "ml"]),
        VocabEntry::phrases("deep learning", &["deep learning", "dl"]),
        VocabEntry::phrases("data science", &["data science"]),
        VocabEntry::phrases("tensorflow", &["tensorflow"]),
        VocabEntry::phrases("pytorch", &["pytorch", "torch"]),
        VocabEntry::phrases("git", &["git"]),
        VocabEntry::phrases("linux", &["linux"]),
    ]
}

/// Institution abbreviations and full names mapped to one label each.
#[must_use]
pub fn institutions() -> Vec<VocabEntry> {
    vec![
        VocabEntry::phrases("IIT", &["iit", "iits", "indian institute of technology"]),
        VocabEntry::phrases(
            "IIIT",
            &["iiit", "indian institute of information technology"],
        ),
        VocabEntry::phrases("NIT", &["nit", "national institute of technology"]),
        VocabEntry::phrases("BITS Pilani", &["bits pilani"]),
        VocabEntry::phrases("MIT", &["mit", "massachusetts institute of technology"]),
        VocabEntry::phrases("Stanford", &["stanford", "stanford university"]),
        VocabEntry::phrases("Harvard", &["harvard", "harvard university"]),
        VocabEntry::phrases("UC Berkeley", &["uc berkeley", "berkeley"]),
        VocabEntry::phrases("Carnegie Mellon", &["carnegie mellon", "cmu"]),
        VocabEntry::phrases("Oxford", &["oxford"]),
        VocabEntry::phrases("Cambridge", &["cambridge"]),
    ]
}

/// Employer names.
#[must_use]
pub fn companies() -> Vec<VocabEntry> {
    vec![
        VocabEntry::phrases("Google", &["google", "alphabet"]),
        VocabEntry::phrases("Microsoft", &["microsoft", "msft"]),
        VocabEntry::phrases("Amazon", &["amazon"]),
        VocabEntry::phrases("Meta", &["meta", "facebook"]),
        VocabEntry::phrases("Apple", &["apple"]),
        VocabEntry::phrases("Netflix", &["netflix"]),
        VocabEntry::phrases("Uber", &["uber"]),
        VocabEntry::phrases("TCS", &["tcs", "tata consultancy services"]),
        VocabEntry::phrases("Infosys", &["infosys"]),
        VocabEntry::phrases("Wipro", &["wipro"]),
        VocabEntry::phrases("Accenture", &["accenture"]),
        VocabEntry::phrases("IBM", &["ibm"]),
    ]
}

/// Course names.
#[must_use]
pub fn courses() -> Vec<VocabEntry> {
    vec![
        VocabEntry::phrases(
            "Computer Science",
            &["computer science", "computer engineering", "cse"],
        ),
        VocabEntry::phrases("Information Technology", &["information technology"]),
        VocabEntry::phrases("Electronics", &["electronics", "ece"]),
        VocabEntry::phrases("MCA", &["mca"]),
        VocabEntry::phrases("BCA", &["bca"]),
        VocabEntry::phrases("B.Tech", &["b.tech", "btech", "b tech"]),
        VocabEntry::phrases("M.Tech", &["m.tech", "mtech", "m tech"]),
        VocabEntry::phrases("MBA", &["mba"]),
    ]
}

/// Words in the neighbourhood of a skill that mark it as nice-to-have.
#[must_use]
pub fn optional_markers() -> Vec<String> {
    [
        "optional",
        "nice to have",
        "nice-to-have",
        "good to have",
        "bonus",
        "plus",
        "preferred",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Generic words that are never accepted as part of a candidate name.
///
/// Every vocabulary phrase is excluded on top of these; see
/// [`NameExtractor`](crate::name::NameExtractor).
#[must_use]
pub fn excluded_name_words() -> Vec<String> {
    [
        "a", "an", "the", "me", "us", "all", "any", "some", "someone", "anyone", "one",
        "candidate", "candidates", "applicant", "applicants", "profile", "profiles",
        "person", "people", "developer", "developers", "engineer", "engineers",
        "programmer", "programmers", "intern", "interns", "fresher", "freshers",
        "senior", "junior", "lead", "manager", "architect", "analyst", "scientist",
        "expert", "frontend", "backend", "fullstack", "full", "stack", "devops",
        "experience", "experienced", "year", "years", "skill", "skills", "knowledge",
        "background", "degree", "named", "called", "good", "strong", "minimum",
        "maximum", "optional", "bonus", "plus",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
