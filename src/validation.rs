//! Project name and Python version validation.
//! Names become the Python package directory under `src/`, so they must be
//! valid Python identifiers that do not shadow keywords, dunder names, or
//! standard library modules.

use crate::error::{Error, NameError, Result};
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());

static PYTHON_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").unwrap());

/// Python hard keywords (3.x).
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Names that are not keywords but would still shadow something the
/// generated project relies on.
const RESERVED_NAMES: &[&str] = &["test", "tests", "setup", "site"];

/// Top-level Python standard library module names (3.12).
const STDLIB_MODULES: &[&str] = &[
    "abc", "aifc", "argparse", "array", "ast", "asyncio", "atexit", "audioop",
    "base64", "bdb", "binascii", "bisect", "builtins", "bz2", "calendar",
    "cgi", "cgitb", "chunk", "cmath", "cmd", "code", "codecs", "codeop",
    "collections", "colorsys", "compileall", "concurrent", "configparser",
    "contextlib", "contextvars", "copy", "copyreg", "crypt", "csv", "ctypes",
    "curses", "dataclasses", "datetime", "dbm", "decimal", "difflib", "dis",
    "doctest", "email", "encodings", "ensurepip", "enum", "errno",
    "faulthandler", "fcntl", "filecmp", "fileinput", "fnmatch", "fractions",
    "ftplib", "functools", "gc", "getopt", "getpass", "gettext", "glob",
    "graphlib", "grp", "gzip", "hashlib", "heapq", "hmac", "html", "http",
    "idlelib", "imaplib", "imghdr", "importlib", "inspect", "io", "ipaddress",
    "itertools", "json", "keyword", "lib2to3", "linecache", "locale",
    "logging", "lzma", "mailbox", "mailcap", "marshal", "math", "mimetypes",
    "mmap", "modulefinder", "msilib", "msvcrt", "multiprocessing", "netrc",
    "nis", "nntplib", "ntpath", "nturl2path", "numbers", "opcode", "operator",
    "optparse", "os", "ossaudiodev", "pathlib", "pdb", "pickle", "pickletools",
    "pipes", "pkgutil", "platform", "plistlib", "poplib", "posix", "posixpath",
    "pprint", "profile", "pstats", "pty", "pwd", "py_compile", "pyclbr",
    "pydoc", "queue", "quopri", "random", "re", "readline", "reprlib",
    "resource", "rlcompleter", "runpy", "sched", "secrets", "select",
    "selectors", "shelve", "shlex", "shutil", "signal", "site", "smtplib",
    "sndhdr", "socket", "socketserver", "spwd", "sqlite3", "sre_compile",
    "sre_constants", "sre_parse", "ssl", "stat", "statistics", "string",
    "stringprep", "struct", "subprocess", "sunau", "symtable", "sys",
    "sysconfig", "syslog", "tabnanny", "tarfile", "telnetlib", "tempfile",
    "termios", "textwrap", "threading", "time", "timeit", "tkinter", "token",
    "tokenize", "tomllib", "trace", "traceback", "tracemalloc", "tty",
    "turtle", "turtledemo", "types", "typing", "unicodedata", "unittest",
    "urllib", "uu", "uuid", "venv", "warnings", "wave", "weakref",
    "webbrowser", "winreg", "winsound", "wsgiref", "xdrlib", "xml", "xmlrpc",
    "zipapp", "zipfile", "zipimport", "zlib", "zoneinfo",
];

/// Validates that `name` is usable as the project's Python package name.
///
/// Rules are applied in order: empty, identifier syntax, keyword, dunder,
/// standard library / reserved name collision. The first violated rule
/// determines the `NameError` reason carried in the returned error.
///
/// # Returns
/// * `Result<String>` - The accepted name, unchanged
pub fn validate_name(name: &str) -> Result<String> {
    let reject = |reason| Error::InvalidName { name: name.to_string(), reason };

    if name.trim().is_empty() {
        return Err(reject(NameError::Empty));
    }
    if !IDENTIFIER_RE.is_match(name) {
        return Err(reject(NameError::InvalidIdentifier));
    }
    if PYTHON_KEYWORDS.contains(&name) {
        return Err(reject(NameError::Keyword));
    }
    if name.starts_with("__") && name.ends_with("__") {
        return Err(reject(NameError::Dunder));
    }
    if STDLIB_MODULES.contains(&name) || RESERVED_NAMES.contains(&name) {
        return Err(reject(NameError::ReservedModule));
    }

    Ok(name.to_string())
}

/// Validates that a Python version string is in `X.Y` form.
pub fn validate_python_version(version: &str) -> Result<()> {
    if !PYTHON_VERSION_RE.is_match(version) {
        return Err(Error::InvalidPythonVersion { version: version.to_string() });
    }
    Ok(())
}

/// Derives a package name from a directory basename for `new .`.
///
/// Every character outside `[A-Za-z0-9_]` becomes an underscore, a leading
/// digit gets an underscore prepended, and `fallback` is used when nothing
/// usable survives. The result still goes through [`validate_name`].
pub fn derive_package_name(dir_name: &str, fallback: &str) -> String {
    let converted: String = dir_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if converted.is_empty() {
        fallback.to_string()
    } else if converted.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", converted)
    } else {
        converted
    }
}
