//! Built-in programs shown when no file is given.

use crate::lexer::Language;

const C_SAMPLE: &str = r#"// Sample C program: a tiny ring buffer
#include <stdio.h>

/*
 * Fixed-size buffer of recent readings.
 */
struct ring {
    int data[8];
    unsigned head;
};

static double average(const struct ring *r, int count) {
    long total = 0;
    for (int i = 0; i < count; i++) {
        total += r->data[i];
    }
    return count ? (double)total / count : 0.0;
}

int main() {
    struct ring buf;
    char *label = "avg: %f\n";
    buf.head = 0;
    buf.data[buf.head++] = 42;
    printf(label, average(&buf, 1));
    return 0; // done
}
"#;

const PYTHON_SAMPLE: &str = r#"# Sample Python program: word statistics
import sys

THRESHOLD = 3

class Counter:
    def __init__(self, words):
        self.words = words
        self.seen = {}

    def count(self):
        for word in self.words:
            self.seen[word] = self.seen.get(word, 0) + 1
        return self.seen

def report(counts, limit=THRESHOLD):
    """
    Print every word seen at least `limit` times.
    """
    shown = 0
    for word, n in sorted(counts.items()):
        if n >= limit:
            print(f"{word}: {n}")
            shown += 1
    return shown

if __name__ == "__main__":
    text = sys.stdin.read()
    total = report(Counter(text.split()).count())
    print('matched', total)
"#;

pub fn sample_source(language: Language) -> &'static str {
    match language {
        Language::CLike => C_SAMPLE,
        Language::Python => PYTHON_SAMPLE,
    }
}
