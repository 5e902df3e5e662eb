//! Artifact templates for the generated Flask backend.
//!
//! Each template is registered under its archive-relative path. Slots use
//! minijinja `{{ … }}` expressions; the memory variants are selected with
//! `{% if use_memory %}` fragments at render time, so the emitted backend
//! never carries dead memory endpoints.

/// Templated artifacts in emission order. The workflow snapshot is not a
/// template and is appended separately, always last.
pub const ARTIFACT_TEMPLATES: [(&str, &str); 8] = [
    ("app.py", APP_PY),
    ("routes/workflow_routes.py", WORKFLOW_ROUTES_PY),
    ("services/llm_service.py", LLM_SERVICE_PY),
    ("utils/workflow_executor.py", WORKFLOW_EXECUTOR_PY),
    ("requirements.txt", REQUIREMENTS_TXT),
    (".env", DOTENV),
    (".gitignore", GITIGNORE),
    ("README.md", README_MD),
];

/// Path of the verbatim workflow snapshot artifact.
pub const WORKFLOW_SNAPSHOT_PATH: &str = "workflow.json";

/// Flask entry point. Fixed text.
const APP_PY: &str = r#"from flask import Flask, request, jsonify
from flask_cors import CORS
import os
import json
from routes import workflow_routes
from utils import workflow_executor

app = Flask(__name__)
CORS(app)

# Register routes
app.register_blueprint(workflow_routes.bp)

if __name__ == "__main__":
    port = int(os.environ.get("PORT", 5000))
    app.run(host="0.0.0.0", port=port, debug=True)
"#;

/// Blueprint with the execute endpoint; the clear-memory endpoint exists
/// only when memory is enabled.
const WORKFLOW_ROUTES_PY: &str = r#"from flask import Blueprint, request, jsonify
from services import llm_service
from utils import workflow_executor

bp = Blueprint('workflow', __name__, url_prefix='/api')

@bp.route('/execute', methods=['POST'])
def execute_workflow():
    data = request.json
    input_message = data.get('message', '')

    # Execute the workflow
    result = workflow_executor.execute_workflow(input_message)

    return jsonify(result)
{%- if use_memory %}


@bp.route('/clear-memory', methods=['POST'])
def clear_memory():
    """Clear the conversation history"""
    result = workflow_executor.clear_conversation_history()
    return jsonify(result)
{%- endif %}
"#;

/// LangChain adapter. Carries the model/api-key/temperature/memory slots
/// and the provider family annotation; the memory flag is passed as a
/// lowercase textual token and parsed by the generated constructor.
const LLM_SERVICE_PY: &str = r#"# LangChain chat service for the generated workflow backend.
# Provider family: {{ provider_family }}
from langchain_openai import ChatOpenAI
from langchain_anthropic import ChatAnthropic
from langchain_community.llms import HuggingFaceEndpoint
from langchain_google_genai import ChatGoogleGenerativeAI
from langchain.schema import HumanMessage, AIMessage
import os
from typing import Dict, Any, Optional

# Keep the last 10 exchanges when memory is enabled.
MAX_HISTORY_MESSAGES = 20

class LLMService:
    def __init__(self, model="{{ model }}", api_key="{{ api_key }}", temperature={{ temperature }}, use_memory="{{ use_memory }}"):
        self.model = model
        self.api_key = api_key
        self.temperature = float(temperature)
        self.use_memory = str(use_memory).lower() == "true"
        self.chat_history = []
        self._llm = self._initialize_llm()

    def _initialize_llm(self):
        """Initialize the appropriate LLM based on the model name"""
        if "gpt" in self.model.lower():
            # OpenAI models
            return ChatOpenAI(
                model=self.model,
                openai_api_key=self.api_key,
                temperature=self.temperature
            )
        elif "claude" in self.model.lower():
            # Anthropic models
            return ChatAnthropic(
                model=self.model,
                anthropic_api_key=self.api_key,
                temperature=self.temperature
            )
        elif "gemini" in self.model.lower():
            # Google Gemini models
            return ChatGoogleGenerativeAI(
                model=self.model,
                google_api_key=self.api_key,
                temperature=self.temperature
            )
        elif "llama" in self.model.lower() or "mistral" in self.model.lower():
            # HuggingFace models
            return HuggingFaceEndpoint(
                repo_id=self.model,
                huggingfacehub_api_token=self.api_key,
                temperature=self.temperature
            )
        else:
            # Default to OpenAI if model type can't be determined
            print(f"Model type not recognized: {self.model}. Defaulting to gpt-4o.")
            return ChatOpenAI(
                model="gpt-4o",
                openai_api_key=self.api_key,
                temperature=self.temperature
            )

    def generate_response(self, prompt: str) -> Dict[str, Any]:
        """Generate a response from the LLM based on the prompt"""
        try:
            if self.use_memory:
                # Add the new user message to chat history
                self.chat_history.append(HumanMessage(content=prompt))

                # Generate response from the full conversation context
                response = self._llm.invoke(self.chat_history.copy())

                # Add the AI response to chat history
                self.chat_history.append(AIMessage(content=response.content if hasattr(response, "content") else str(response)))

                # Trim oldest entries once the cap is exceeded
                if len(self.chat_history) > MAX_HISTORY_MESSAGES:
                    self.chat_history = self.chat_history[-MAX_HISTORY_MESSAGES:]
            else:
                # No memory, just process the current message
                response = self._llm.invoke([HumanMessage(content=prompt)])

            return {
                "text": response.content if hasattr(response, "content") else str(response),
                "model": self.model,
                "success": True
            }
        except Exception as e:
            return {
                "error": f"Error generating response: {str(e)}",
                "success": False
            }

    def update_model(self, model: str, api_key: Optional[str] = None, temperature: Optional[float] = None):
        """Update the model and reinitialize the LLM"""
        self.model = model
        if api_key:
            self.api_key = api_key
        if temperature is not None:
            self.temperature = float(temperature)
        self._llm = self._initialize_llm()

    def clear_memory(self):
        """Clear the conversation history"""
        if self.use_memory:
            self.chat_history = []

# Create a default instance
default_llm = LLMService()
"#;

/// Workflow executor. The docstring wording and the clear function follow
/// the memory flag.
const WORKFLOW_EXECUTOR_PY: &str = r#"from services.llm_service import default_llm

def execute_workflow(input_message):
    """
    Execute the workflow with the given input message{% if use_memory %},
    reusing the conversation memory kept by the LLM service{% else %} as
    a stateless request with no conversation context{% endif %}
    """
    try:
        # Process the input message
        processed_input = input_message.strip()

        # Generate response using the LLM
        llm_response = default_llm.generate_response(processed_input)

        if not llm_response.get("success", False):
            return {
                "success": False,
                "error": llm_response.get("error", "Unknown error")
            }

        # Return the result
        return {
            "success": True,
            "input": processed_input,
            "output": llm_response["text"],
            "model": llm_response["model"],
            "has_memory": default_llm.use_memory
        }
    except Exception as e:
        return {
            "success": False,
            "error": f"Workflow execution failed: {str(e)}"
        }
{%- if use_memory %}


def clear_conversation_history():
    """
    Clear the conversation history in the LLM service
    """
    default_llm.clear_memory()
    return {"success": True, "message": "Conversation history cleared"}
{%- endif %}
"#;

/// Python dependencies, covering every supported provider family. Fixed
/// text.
const REQUIREMENTS_TXT: &str = r#"flask==2.3.3
flask-cors==4.0.0
requests==2.31.0
python-dotenv==1.0.0
langchain==0.1.12
langchain-openai==0.1.5
langchain-anthropic==0.1.1
langchain-community==0.2.0
langchain-google-genai==0.0.6
"#;

/// Environment file. The editor captures one credential; it is prefilled
/// into every family's variable.
const DOTENV: &str = r#"# API Keys
OPENAI_API_KEY={{ api_key }}
ANTHROPIC_API_KEY={{ api_key }}
GOOGLE_API_KEY={{ api_key }}
HUGGINGFACEHUB_API_TOKEN={{ api_key }}

# Server Configuration
PORT=5000
"#;

/// Ignore rules so the bundle can be committed without leaking the
/// prefilled credentials. Fixed text.
const GITIGNORE: &str = r#"__pycache__/
*.pyc
.env
venv/
"#;

/// Setup guide. The memory section wording flips with the flag and the
/// clear-memory endpoint is documented only when it exists.
const README_MD: &str = r#"# AI Workflow Backend

This is an automatically generated Flask backend for an AI workflow.

## Setup

1. Install dependencies:
   ```
   pip install -r requirements.txt
   ```

2. Run the application:
   ```
   python app.py
   ```

## API Endpoints

- POST /api/execute
  - Executes the workflow with the provided input
  - Request body: `{ "message": "Your input message" }`
  - Response: `{ "success": true, "input": "...", "output": "..." }`

## Configuration

You can modify the .env file to update API keys and other configuration.

## Memory Context

This backend {% if use_memory %}includes{% else %}can include{% endif %} conversation memory, allowing the LLM to remember previous interactions in a conversation.

{% if use_memory %}Memory is currently **enabled**.{% else %}Memory is currently **disabled**. To enable it, update the `use_memory` parameter in the LLMService class.{% endif %}
{%- if use_memory %}

### Memory API Endpoints

- POST /api/clear-memory
  - Clears the conversation history
  - No request body needed
  - Response: `{ "success": true, "message": "Conversation history cleared" }`
{%- endif %}

### How Memory Works

When memory is enabled:
1. The LLM keeps track of the conversation history
2. Each new message is added to the history
3. The full conversation context is sent with each request
4. The LLM can reference previous messages in its responses

This is useful for:
- Maintaining context in multi-turn conversations
- Building chatbots that can remember user information
- Creating assistants that can refer back to previous questions
"#;
