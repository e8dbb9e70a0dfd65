use super::rules::CompletionTemplate;

const fn template(key: &'static str, template: &'static str) -> CompletionTemplate {
    CompletionTemplate { key, template }
}

/// Snippets offered by completion, in the order they are suggested.
pub const COMPLETION_TEMPLATES: &[CompletionTemplate] = &[
    template("def", "def function_name(args):\n    \"\"\"Docstring\"\"\"\n    pass"),
    template(
        "class",
        "class ClassName:\n    \"\"\"Docstring\"\"\"\n    \n    def __init__(self):\n        pass",
    ),
    template("if", "if condition:\n    pass"),
    template("for", "for item in iterable:\n    pass"),
    template("while", "while condition:\n    pass"),
    template("try", "try:\n    pass\nexcept Exception as e:\n    pass"),
    template("with", "with open(filename, \"r\") as f:\n    content = f.read()"),
    template("import", "import module_name"),
    template("from", "from module import name"),
    template("async", "async def async_function():\n    await something()"),
    template("lambda", "lambda x: x"),
    template("list", "[item for item in iterable]"),
    template("dict", "{key: value for key, value in items}"),
    template("main", "if __name__ == \"__main__\":\n    main()"),
    template("init", "def __init__(self):\n    pass"),
    template("str", "def __str__(self):\n    return f\"{self.__class__.__name__}\""),
    template("repr", "def __repr__(self):\n    return f\"{self.__class__.__name__}()\""),
    template("property", "@property\ndef name(self):\n    return self._name"),
    template("staticmethod", "@staticmethod\ndef method():\n    pass"),
    template("classmethod", "@classmethod\ndef method(cls):\n    pass"),
    template("dataclass", "@dataclass\nclass DataClass:\n    field: type"),
    template(
        "unittest",
        "class TestCase(unittest.TestCase):\n    def test_something(self):\n        self.assertEqual(expected, actual)",
    ),
    template(
        "argparse",
        "parser = argparse.ArgumentParser()\nparser.add_argument(\"--arg\")\nargs = parser.parse_args()",
    ),
    template(
        "logging",
        "logging.basicConfig(level=logging.INFO)\nlogger = logging.getLogger(__name__)",
    ),
    template("json", "with open(\"file.json\", \"r\") as f:\n    data = json.load(f)"),
    template("requests", "response = requests.get(url)\ndata = response.json()"),
    template("flask", "@app.route(\"/\")\ndef index():\n    return \"Hello World\""),
    template("tkinter", "root = tk.Tk()\nroot.mainloop()"),
    template(
        "pygame",
        "pygame.init()\nscreen = pygame.display.set_mode((800, 600))",
    ),
];

/// Placeholder used for every generated description field.
pub const DESCRIPTION_PLACEHOLDER: &str = "Description";

/// Returns text when the documented function returns something.
pub const RETURNS_VALUE: &str = "Description of return value";

/// Returns text when no `return` appears in the supplied code.
pub const RETURNS_NONE: &str = "None";

/// Indentation of entries inside an `Args:`/`Attributes:` section.
pub const SECTION_ENTRY_INDENT: &str = "        ";

/// Single-line block used when no header could be recognised.
pub const FALLBACK_DOCSTRING: &str = "\"\"\"Description.\"\"\"";
