//! The `quizforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizforge.toml
    if std::path::Path::new("quizforge.toml").exists() {
        println!("quizforge.toml already exists, skipping.");
    } else {
        std::fs::write("quizforge.toml", SAMPLE_CONFIG)?;
        println!("Created quizforge.toml");
    }

    // Create example catalog
    std::fs::create_dir_all("catalogs")?;
    let example_path = std::path::Path::new("catalogs/python-basics.toml");
    if example_path.exists() {
        println!("catalogs/python-basics.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_CATALOG)?;
        println!("Created catalogs/python-basics.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizforge validate --catalog catalogs/python-basics.toml");
    println!("  2. Run: quizforge run --catalog catalogs/python-basics.toml --name You");
    println!("  3. Later: quizforge stats --snapshot ./quizforge-session.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizforge configuration

[remote]
# Engine service used with `quizforge run --remote`. When the service is
# unreachable the local engine answers instead.
base_url = "http://localhost:8000"
timeout_secs = 10
"#;

const EXAMPLE_CATALOG: &str = r##"[catalog]
id = "python-basics"
name = "Python Basics"
description = "Introductory Python questions across three difficulty tiers"

[[questions]]
id = "e1"
difficulty = "easy"
topic = "Python Basics"
prompt = "What is the correct way to print \"Hello World\" in Python?"
choices = ["print(\"Hello World\")", "echo \"Hello World\"", "console.log(\"Hello World\")", "printf(\"Hello World\")"]
correct_answer = "print(\"Hello World\")"
hint = "Python uses the print() function to display output."
explanation = "In Python, the print() function is used to output text to the console."

[[questions]]
id = "e2"
difficulty = "easy"
topic = "Variables"
prompt = "Which of these is a valid variable name in Python?"
choices = ["my_variable", "2variable", "my-variable", "class"]
correct_answer = "my_variable"
hint = "Variable names can contain letters, numbers, and underscores, but cannot start with a number."
explanation = "Variable names in Python must start with a letter or underscore, and can contain letters, numbers, and underscores."

[[questions]]
id = "e3"
difficulty = "easy"
topic = "Data Types"
prompt = "What data type is the value 42 in Python?"
choices = ["int", "float", "string", "boolean"]
correct_answer = "int"
hint = "Whole numbers without decimal points are integers."
explanation = "42 is an integer (int) because it is a whole number without a decimal point."

[[questions]]
id = "e4"
difficulty = "easy"
topic = "Strings"
prompt = "How do you get the length of a string \"python\" in Python?"
choices = ["len(\"python\")", "length(\"python\")", "size(\"python\")", "\"python\".length()"]
correct_answer = "len(\"python\")"
hint = "Python has a built-in function to find the length of objects."
explanation = "The len() function returns the number of characters in a string."

[[questions]]
id = "e5"
difficulty = "easy"
topic = "Lists"
prompt = "How do you create an empty list in Python?"
choices = ["[]", "{}", "()", "list()"]
correct_answer = "[]"
hint = "Lists use square brackets in Python."
explanation = "Empty lists are created using square brackets [] or the list() constructor."

[[questions]]
id = "m1"
difficulty = "medium"
topic = "Control Flow"
prompt = "What will this code output?\nif 5 > 3:\n    print(\"Yes\")\nelse:\n    print(\"No\")"
choices = ["Yes", "No", "Error", "Nothing"]
correct_answer = "Yes"
hint = "Check if the condition 5 > 3 is true or false."
explanation = "Since 5 is greater than 3, the condition is True, so \"Yes\" is printed."

[[questions]]
id = "m2"
difficulty = "medium"
topic = "Loops"
prompt = "What does range(3) generate?"
choices = ["[0, 1, 2]", "[1, 2, 3]", "[0, 1, 2, 3]", "[1, 2]"]
correct_answer = "[0, 1, 2]"
hint = "range() starts from 0 by default and goes up to (but not including) the specified number."
explanation = "range(3) generates numbers from 0 up to (but not including) 3: 0, 1, 2."

[[questions]]
id = "m3"
difficulty = "medium"
topic = "Functions"
prompt = "What keyword is used to define a function in Python?"
choices = ["def", "function", "func", "define"]
correct_answer = "def"
hint = "It's a three-letter keyword that's short for \"define\"."
explanation = "The \"def\" keyword is used to define functions in Python."

[[questions]]
id = "m4"
difficulty = "medium"
topic = "Lists"
prompt = "What will fruits[1] return if fruits = [\"apple\", \"banana\", \"orange\"]?"
choices = ["\"banana\"", "\"apple\"", "\"orange\"", "Error"]
correct_answer = "\"banana\""
hint = "Python uses zero-based indexing for lists."
explanation = "List indexing starts at 0, so fruits[1] returns the second element: \"banana\"."

[[questions]]
id = "m5"
difficulty = "medium"
topic = "Dictionaries"
prompt = "How do you access the value associated with key \"name\" in a dictionary called person?"
choices = ["person[\"name\"]", "person.name", "person(name)", "person->name"]
correct_answer = "person[\"name\"]"
hint = "Dictionaries use square brackets with the key to access values."
explanation = "Dictionary values are accessed using square brackets with the key: person[\"name\"]."

[[questions]]
id = "m6"
difficulty = "medium"
topic = "String Methods"
prompt = "What does \"hello\".upper() return?"
choices = ["\"HELLO\"", "\"Hello\"", "\"hello\"", "Error"]
correct_answer = "\"HELLO\""
hint = "The upper() method converts all characters to uppercase."
explanation = "The upper() method returns a new string with all characters converted to uppercase."

[[questions]]
id = "h1"
difficulty = "hard"
topic = "List Comprehension"
prompt = "What does [x**2 for x in range(4)] create?"
choices = ["[0, 1, 4, 9]", "[1, 4, 9, 16]", "[0, 1, 2, 3]", "[2, 4, 6, 8]"]
correct_answer = "[0, 1, 4, 9]"
hint = "This is a list comprehension that squares each number from range(4)."
explanation = "List comprehension squares each number: 0*0=0, 1*1=1, 2*2=4, 3*3=9, resulting in [0, 1, 4, 9]."

[[questions]]
id = "h2"
difficulty = "hard"
topic = "Exception Handling"
prompt = "Which block is used to handle exceptions in Python?"
choices = ["try/except", "try/catch", "handle/error", "exception/handle"]
correct_answer = "try/except"
hint = "Python uses different keywords than Java or JavaScript for exception handling."
explanation = "Python uses try/except blocks for exception handling, unlike try/catch in other languages."

[[questions]]
id = "h3"
difficulty = "hard"
topic = "Classes"
prompt = "What method is automatically called when creating a new instance of a class?"
choices = ["__init__", "__new__", "__create__", "__start__"]
correct_answer = "__init__"
hint = "It's a special method (dunder method) that initializes the object."
explanation = "The __init__ method is the constructor that automatically runs when creating a new instance."

[[questions]]
id = "h4"
difficulty = "hard"
topic = "Lambda Functions"
prompt = "What does lambda x: x * 2 create?"
choices = ["An anonymous function that doubles its input", "A variable named lambda", "A syntax error", "A list with doubled values"]
correct_answer = "An anonymous function that doubles its input"
hint = "Lambda creates small, anonymous functions in Python."
explanation = "Lambda functions are anonymous functions. This lambda takes x and returns x * 2."
"##;
