use super::rules::{IntentRule, TriggerMatch};
use crate::core::Marker;

const CREATE: &[&str] = &["create", "make"];
const DEFINE: &[&str] = &["create", "make", "define"];

/// Chat intents in priority order; the first matching intent answers.
pub const INTENTS: &[IntentRule] = &[
    IntentRule {
        name: "greeting",
        triggers: &["hello", "hi", "hey", "sup"],
        qualifiers: &[],
        trigger_match: TriggerMatch::Word,
        marker: None,
        answer: "Hey! 🐱 I'm your local AI assistant. Ask me about code!",
    },
    IntentRule {
        name: "help",
        triggers: &["help"],
        qualifiers: &[],
        trigger_match: TriggerMatch::Substring,
        marker: Some(Marker::Robot),
        answer: "I can help with:
• Explain code - walk through a selection line by line
• Find bugs - flag probable mistakes in your code
• Refactor - get improvement suggestions
• Generate docstrings - document a function or class header
• Code completion - finish the word before the cursor
• Ask me coding questions!",
    },
    IntentRule {
        name: "list-creation",
        triggers: &["list"],
        qualifiers: CREATE,
        trigger_match: TriggerMatch::Substring,
        marker: None,
        answer: "Create a list:
```python
my_list = [1, 2, 3]
my_list = list(range(10))
my_list = [x**2 for x in range(10)]  # comprehension
```",
    },
    IntentRule {
        name: "dict-creation",
        triggers: &["dict"],
        qualifiers: CREATE,
        trigger_match: TriggerMatch::Substring,
        marker: None,
        answer: "Create a dict:
```python
my_dict = {'key': 'value'}
my_dict = dict(a=1, b=2)
my_dict = {k: v for k, v in items}  # comprehension
```",
    },
    IntentRule {
        name: "function-definition",
        triggers: &["function"],
        qualifiers: DEFINE,
        trigger_match: TriggerMatch::Substring,
        marker: None,
        answer: "Define a function:
```python
def my_function(arg1, arg2='default'):
    '''Docstring'''
    result = arg1 + arg2
    return result
```",
    },
    IntentRule {
        name: "class-definition",
        triggers: &["class"],
        qualifiers: DEFINE,
        trigger_match: TriggerMatch::Substring,
        marker: None,
        answer: "Define a class:
```python
class MyClass:
    def __init__(self, value):
        self.value = value

    def method(self):
        return self.value
```",
    },
    IntentRule {
        name: "iteration",
        triggers: &["loop", "iterate"],
        qualifiers: &[],
        trigger_match: TriggerMatch::Substring,
        marker: None,
        answer: "Loops in Python:
```python
# For loop
for item in iterable:
    print(item)

# While loop
while condition:
    do_something()

# Enumerate
for i, item in enumerate(items):
    print(i, item)
```",
    },
    IntentRule {
        name: "file-io",
        triggers: &["file"],
        qualifiers: &["read", "open"],
        trigger_match: TriggerMatch::Substring,
        marker: None,
        answer: "File operations:
```python
# Read file
with open('file.txt', 'r') as f:
    content = f.read()

# Write file
with open('file.txt', 'w') as f:
    f.write('content')
```",
    },
    IntentRule {
        name: "error-handling",
        triggers: &["error", "exception"],
        qualifiers: &[],
        trigger_match: TriggerMatch::Substring,
        marker: None,
        answer: "Exception handling:
```python
try:
    risky_operation()
except ValueError as e:
    print(f'Value error: {e}')
except Exception as e:
    print(f'Error: {e}')
finally:
    cleanup()
```",
    },
    IntentRule {
        name: "import",
        triggers: &["import"],
        qualifiers: &[],
        trigger_match: TriggerMatch::Substring,
        marker: None,
        answer: "Import statements:
```python
import module
import module as alias
from module import function
from module import *  # not recommended
```",
    },
];

/// Answer given when no intent matches.
pub const FALLBACK_ANSWER: &str = "I'm a local assistant - I understand basic Python questions! Try asking about:
• How to create lists/dicts/functions/classes
• File operations
• Loops and iteration
• Error handling
• Or use the analysis tools on your code!";
